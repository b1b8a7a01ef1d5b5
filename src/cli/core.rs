
use chrono::Datelike;
use clap::Parser;
use lazy_static::lazy_static;

use crate::cli::fetch::FetchSettings;

lazy_static! {
    /// Stores the full version string we plan to use, which is generated in build.rs
    /// # Examples
    /// * `0.1.0-6bb9635-dirty` - while on a dirty branch
    /// * `0.1.0-6bb9635` - with a fresh commit
    pub static ref FULL_VERSION: String = format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("VERGEN_GIT_DESCRIBE"));

    /// Shared after help string containing the legalese.
    pub static ref AFTER_HELP: String = format!("Copyright (C) {}
This program comes with ABSOLUTELY NO WARRANTY. Sequence data is retrieved
from NCBI E-utilities and is subject to the NCBI usage policies.", chrono::Utc::now().year());
}

pub fn get_cli() -> FetchSettings {
    FetchSettings::parse()
}
