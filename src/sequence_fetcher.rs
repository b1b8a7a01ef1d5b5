
use log::info;

use crate::data_types::fasta_response::FastaResponse;
use crate::data_types::strand::Strand;
use crate::eutils::{EutilsConfig, EutilsTransport};
use crate::errors::SeqFetchError;

/// Fetches a nucleotide range from nuccore as FASTA text.
/// Coordinates are passed through as given, 1-based and inclusive.
/// # Arguments
/// * `config` - endpoint configuration
/// * `transport` - how to issue the request
/// * `reference_id` - nuccore ID of the reference sequence
/// * `strand` - which strand to return
/// * `start` - first coordinate
/// * `stop` - last coordinate
/// # Errors
/// * if the URL cannot be built or the request fails
pub fn fetch_nucleotides<T: EutilsTransport>(
    config: &EutilsConfig, transport: &T,
    reference_id: &str, strand: Strand, start: u64, stop: u64
) -> Result<FastaResponse, SeqFetchError> {
    info!("Retrieving nucleotide sequence...");
    let url = config.nucleotide_fetch_url(reference_id, strand, start, stop)?;
    let text = transport.get_text(&url)?;
    Ok(FastaResponse::new(text))
}
