
/// Accession parsing and stepping to the neighboring gene
pub mod accession;
/// Wrapper for FASTA text returned by the nucleotide fetch
pub mod fasta_response;
/// The gene location record parsed from Entrez Gene XML
pub mod gene_record;
/// Plus/minus strand orientation
pub mod strand;
/// First-match value extraction from XML documents
pub mod xml_fields;
