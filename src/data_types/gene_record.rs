
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data_types::strand::Strand;
use crate::data_types::xml_fields::{XmlTarget, collect_first_values};
use crate::errors::SeqFetchError;

/// Tag holding the search result ID in an esearch response
const SEARCH_ID_TAG: &str = "Id";

/// Order matters, `from_xml` unpacks the values positionally
const GENE_TARGETS: [XmlTarget; 6] = [
    XmlTarget::Text("Gene-source_src-int"),
    XmlTarget::Attribute("Na-strand", "value"),
    XmlTarget::Text("Seq-interval_from"),
    XmlTarget::Text("Seq-interval_to"),
    XmlTarget::Text("Gene-commentary_accession"),
    XmlTarget::Text("Gene-commentary_version")
];

/// The location details we need from an Entrez Gene record
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneRecord {
    /// Numeric ID of the genomic sequence containing the gene
    genomic_reference_id: String,
    /// Orientation on the reference
    strand: Strand,
    /// Interval start as reported
    interval_start: u64,
    /// Interval end, already shifted +1 from the reported value
    interval_end: u64,
    /// Accession and version, e.g. NC_000913.3
    refseq_accession: String
}

impl GeneRecord {
    pub fn new(genomic_reference_id: String, strand: Strand, interval_start: u64, interval_end: u64, refseq_accession: String) -> GeneRecord {
        GeneRecord {
            genomic_reference_id,
            strand,
            interval_start,
            interval_end,
            refseq_accession
        }
    }

    /// Parses a full Entrez Gene XML document.
    /// # Arguments
    /// * `xml` - the efetch response for a single gene
    /// # Errors
    /// * if any of the required tags is missing
    /// * if the strand is not plus/minus
    /// * if either interval coordinate is not a non-negative integer
    pub fn from_xml(xml: &str) -> Result<GeneRecord, SeqFetchError> {
        let values = collect_first_values(xml, &GENE_TARGETS)?;
        let mut fields = Vec::with_capacity(values.len());
        for (value, target) in values.into_iter().zip(GENE_TARGETS.iter()) {
            match value {
                Some(v) if !v.trim().is_empty() => fields.push(v.trim().to_string()),
                Some(_) => return Err(SeqFetchError::MalformedResponse(format!("gene record has an empty {}", target_label(target)))),
                None => return Err(SeqFetchError::MalformedResponse(format!("gene record is missing {}", target_label(target))))
            }
        }

        let strand = Strand::from_str(&fields[1])
            .map_err(|_| SeqFetchError::MalformedResponse(format!("unknown strand value \"{}\"", fields[1])))?;
        let interval_start = parse_coordinate(&fields[2], "Seq-interval_from")?;
        let interval_end = parse_coordinate(&fields[3], "Seq-interval_to")?
            .checked_add(1)
            .ok_or_else(|| SeqFetchError::MalformedResponse("Seq-interval_to is out of range".to_string()))?;

        Ok(GeneRecord {
            genomic_reference_id: fields[0].clone(),
            strand,
            interval_start,
            interval_end,
            refseq_accession: format!("{}.{}", fields[4], fields[5])
        })
    }

    pub fn genomic_reference_id(&self) -> &str {
        &self.genomic_reference_id
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn interval_start(&self) -> u64 {
        self.interval_start
    }

    pub fn interval_end(&self) -> u64 {
        self.interval_end
    }

    pub fn refseq_accession(&self) -> &str {
        &self.refseq_accession
    }

    /// The coordinate this gene contributes to a span, which depends on the strand
    pub fn span_boundary(&self) -> u64 {
        self.strand.boundary(self.interval_start, self.interval_end)
    }
}

/// Pulls the single result ID out of an esearch response.
/// # Arguments
/// * `xml` - the esearch response
/// * `term` - the query that was searched, for error reporting
/// # Errors
/// * `NotFound` if there is no result ID
/// * `MalformedResponse` if the document is not XML
pub fn parse_search_id(xml: &str, term: &str) -> Result<String, SeqFetchError> {
    let values = collect_first_values(xml, &[XmlTarget::Text(SEARCH_ID_TAG)])?;
    match values.into_iter().next().flatten() {
        Some(id) if !id.trim().is_empty() => Ok(id.trim().to_string()),
        _ => Err(SeqFetchError::NotFound(term.to_string()))
    }
}

fn parse_coordinate(value: &str, tag: &str) -> Result<u64, SeqFetchError> {
    value.parse::<u64>()
        .map_err(|e| SeqFetchError::MalformedResponse(format!("{tag} value \"{value}\" is not an integer: {e}")))
}

fn target_label(target: &XmlTarget) -> String {
    match target {
        XmlTarget::Text(tag) => tag.to_string(),
        XmlTarget::Attribute(tag, attribute) => format!("{tag}@{attribute}")
    }
}
