
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

use crate::data_types::accession::{PaddingMode, next_accession};
use crate::data_types::gene_record::GeneRecord;
use crate::data_types::strand::Strand;
use crate::eutils::{EutilsConfig, EutilsTransport};
use crate::errors::SeqFetchError;
use crate::locator::GeneLocator;
use crate::sequence_fetcher::fetch_nucleotides;
use crate::util::file_io::write_lines;

/// Knobs for a single run
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Where the XML and FASTA outputs go
    pub output_dir: PathBuf,
    /// How to render the stepped accession
    pub padding: PaddingMode
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            padding: PaddingMode::Drop
        }
    }
}

/// The coordinate pair handed to the nucleotide fetch
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Span {
    pub start: u64,
    pub end: u64,
    pub strand: Strand
}

/// Everything a successful run produced
#[derive(Clone, Debug, Serialize)]
pub struct PipelineOutcome {
    /// The accession the user asked for
    pub accession: String,
    /// The neighboring accession that was looked up
    pub next_accession: String,
    pub first_gene: GeneRecord,
    pub second_gene: GeneRecord,
    pub span: Span,
    /// Path of the FASTA lines file
    pub output_file: PathBuf,
    /// Length of the joined sequence, if the response could be read as FASTA
    pub sequence_length: Option<usize>
}

/// Computes the span between two genes, both boundaries come from `GeneRecord::span_boundary` and the strand comes from the first gene
pub fn compute_span(first_gene: &GeneRecord, second_gene: &GeneRecord) -> Span {
    Span {
        start: first_gene.span_boundary(),
        end: second_gene.span_boundary(),
        strand: first_gene.strand()
    }
}

/// Runs the full lookup: locate the gene, step to its neighbor on the same strand, locate that,
/// fetch the nucleotides between them and write them to `<refseq accession>.txt`.
/// # Arguments
/// * `accession` - the starting accession
/// * `config` - endpoint configuration
/// * `transport` - how requests are issued
/// * `options` - output directory and padding mode
/// # Errors
/// * `NotFound` if either gene is absent, which callers should treat as a normal ending
/// * any parsing, transport, or file error
pub fn run_pipeline<T: EutilsTransport>(
    accession: &str, config: &EutilsConfig, transport: &T, options: &PipelineOptions
) -> Result<PipelineOutcome, SeqFetchError> {
    let locator = GeneLocator::new(config, transport, &options.output_dir);

    // retrieve the requested gene
    let first_gene = locator.locate(accession)?;

    // then the neighbor in the direction of transcription
    let next_accession = next_accession(accession, first_gene.strand(), options.padding)?;
    let second_gene = locator.locate(&next_accession)?;

    let span = compute_span(&first_gene, &second_gene);
    info!("Sequence span and strand: {} - {}, {}", span.start, span.end, span.strand);

    let fasta = fetch_nucleotides(
        config, transport,
        second_gene.genomic_reference_id(), span.strand, span.start, span.end
    )?;

    let sequence_length = match fasta.sequence() {
        Ok(Some(sequence)) => {
            info!("Retrieved {} bp", sequence.len());
            Some(sequence.len())
        },
        Ok(None) => {
            warn!("Nucleotide response did not contain a FASTA record");
            None
        },
        Err(e) => {
            warn!("Nucleotide response could not be read as FASTA: {e}");
            None
        }
    };

    let fasta_lines: Vec<&str> = fasta.lines();
    let output_file = write_lines(&fasta_lines[..], &options.output_dir, second_gene.refseq_accession())?;

    Ok(PipelineOutcome {
        accession: accession.to_string(),
        next_accession,
        first_gene,
        second_gene,
        span,
        output_file,
        sequence_length
    })
}
