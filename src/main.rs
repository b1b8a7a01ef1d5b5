
use log::{LevelFilter, error, info};

use seqfetch::cli::core::{FULL_VERSION, get_cli};
use seqfetch::cli::fetch::{FetchSettings, check_fetch_settings};
use seqfetch::eutils::{EutilsConfig, HttpTransport};
use seqfetch::pipeline::{PipelineOptions, PipelineOutcome, run_pipeline};
use seqfetch::util::file_io::save_json;

/// This will run the lookup for a single accession
/// # Arguments
/// * `settings` - the FetchSettings object
fn run_fetch(settings: FetchSettings) {
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };

    // immediately setup logging first, progress goes to stdout
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .target(env_logger::Target::Stdout)
        .init();
    info!("seqfetch version: {}", &*FULL_VERSION);

    // okay, now we can check all the other settings
    let config: EutilsConfig = match check_fetch_settings(&settings) {
        Ok(c) => c,
        Err(e) => {
            error!("Error while processing CLI settings: {e}");
            std::process::exit(exitcode::USAGE);
        }
    };

    let transport: HttpTransport = match HttpTransport::new() {
        Ok(t) => t,
        Err(e) => {
            error!("Error while creating HTTP client: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let options = PipelineOptions {
        output_dir: settings.output_dir.clone(),
        padding: settings.padding_mode()
    };

    // all the work
    let outcome: PipelineOutcome = match run_pipeline(&settings.accession, &config, &transport, &options) {
        Ok(o) => o,
        Err(e) if e.is_not_found() => {
            // running off the end of an accession series is a normal result
            info!("Search results empty: {e}");
            std::process::exit(e.exit_code());
        },
        Err(e) => {
            error!("Error while fetching sequence for {}: {e}", settings.accession);
            std::process::exit(e.exit_code());
        }
    };
    info!("Sequence saved to {:?}", outcome.output_file);

    if let Some(filename) = settings.summary_filename.as_ref() {
        info!("Saving run summary to {filename:?}");
        if let Err(e) = save_json(&outcome, filename) {
            error!("Error while writing run summary to file: {e}");
            std::process::exit(exitcode::IOERR);
        }
    }
}

fn main() {
    let settings = get_cli();
    run_fetch(settings);

    info!("Process finished successfully.");
}
