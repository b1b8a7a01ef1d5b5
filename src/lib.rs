/// Contains all the CLI related functionality
pub mod cli;
/// Contains the data types shared across the tooling: accessions, gene records, strands, FASTA responses
pub mod data_types;
/// Contains the error type for lookups and fetches
pub mod errors;
/// Contains the E-utilities endpoint configuration and the HTTP transport
pub mod eutils;
/// Contains the gene locator that turns an accession into a gene record
pub mod locator;
/// Contains the end-to-end lookup from one accession to a written sequence file
pub mod pipeline;
/// Contains the nucleotide range fetch
pub mod sequence_fetcher;
/// Contains generic utilities that are handy wrappers
pub mod util;

#[cfg(test)]
mod test_support;
