
use clap::Parser;
use log::info;
use simple_error::bail;
use std::path::PathBuf;

use crate::cli::core::{AFTER_HELP, FULL_VERSION};
use crate::data_types::accession::PaddingMode;
use crate::eutils::{DEFAULT_EUTILS_URL, EutilsConfig};

/// seqfetch, fetches the nucleotide sequence spanning a gene and its neighbor on the same strand.
#[derive(Clone, Parser)]
#[clap(author,
    version = &**FULL_VERSION,
    about,
    after_help = &**AFTER_HELP)]
pub struct FetchSettings {
    /// Accession ID of the starting gene
    #[clap(required = true)]
    #[clap(value_name = "ACCESSION")]
    pub accession: String,

    /// Output directory for the gene records (XML) and the sequence (TXT)
    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(value_name = "DIR")]
    #[clap(default_value = ".")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_dir: PathBuf,

    /// Optional run summary (JSON, gzipped if it ends in .gz)
    #[clap(long = "summary")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub summary_filename: Option<PathBuf>,

    /// Base URL for NCBI E-utilities
    #[clap(long = "base-url")]
    #[clap(value_name = "URL")]
    #[clap(default_value = DEFAULT_EUTILS_URL)]
    #[clap(help_heading = Some("Lookup"))]
    pub base_url: String,

    /// Keep the zero-padding of the accession suffix when stepping (NM_007 -> NM_008 instead of NM_8)
    #[clap(long = "keep-padding")]
    #[clap(help_heading = Some("Lookup"))]
    pub keep_padding: bool,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl FetchSettings {
    pub fn padding_mode(&self) -> PaddingMode {
        if self.keep_padding {
            PaddingMode::Keep
        } else {
            PaddingMode::Drop
        }
    }
}

/// Logs the settings and checks that they are usable, returning the parsed endpoint config.
/// # Arguments
/// * `settings` - the raw CLI settings
/// # Errors
/// * if the accession is blank
/// * if the output directory does not exist
/// * if the base URL does not parse
pub fn check_fetch_settings(settings: &FetchSettings) -> Result<EutilsConfig, Box<dyn std::error::Error>> {
    // dump stuff to the logger
    info!("Accession: {:?}", settings.accession);
    info!("Output directory: {:?}", settings.output_dir);
    if let Some(filename) = settings.summary_filename.as_ref() {
        info!("Summary file: {filename:?}");
    }
    info!("E-utilities base: {}", settings.base_url);
    info!("Padding mode: {:?}", settings.padding_mode());

    if settings.accession.trim().is_empty() {
        bail!("Accession cannot be empty");
    }

    if !settings.output_dir.is_dir() {
        bail!("Output directory does not exist: {:?}", settings.output_dir);
    }

    let config = EutilsConfig::new(&settings.base_url)?;
    Ok(config)
}
