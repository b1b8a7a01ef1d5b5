
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::data_types::gene_record::{GeneRecord, parse_search_id};
use crate::eutils::{EutilsConfig, EutilsTransport};
use crate::errors::SeqFetchError;
use crate::util::file_io::{XML_EXTENSION, write_document};

/// Resolves an accession into a `GeneRecord` via esearch and efetch, saving the raw record along the way
pub struct GeneLocator<'a, T: EutilsTransport> {
    config: &'a EutilsConfig,
    transport: &'a T,
    output_dir: PathBuf
}

impl<'a, T: EutilsTransport> GeneLocator<'a, T> {
    pub fn new(config: &'a EutilsConfig, transport: &'a T, output_dir: &Path) -> Self {
        Self {
            config,
            transport,
            output_dir: output_dir.to_path_buf()
        }
    }

    /// Searches for the accession, fetches the gene record, writes it to `<accession>.xml`, and parses it.
    /// The XML is written before parsing, so it is on disk even when parsing fails.
    /// # Arguments
    /// * `accession` - the accession to locate
    /// # Errors
    /// * `NotFound` if the search has no result
    /// * `MalformedResponse` if the record is missing required fields
    /// * any transport or file errors
    pub fn locate(&self, accession: &str) -> Result<GeneRecord, SeqFetchError> {
        let gene_id = self.search(accession)?;
        let document = self.fetch_gene_document(&gene_id)?;
        let filename = self.write_gene_document(&document, accession)?;
        debug!("Saved gene record to {}", filename.display());

        let record = GeneRecord::from_xml(&document)?;
        debug!("Parsed gene record: {record:?}");
        Ok(record)
    }

    fn search(&self, term: &str) -> Result<String, SeqFetchError> {
        info!("Searching \"{term}\"");
        let url = self.config.search_url(term)?;
        let response = self.transport.get_text(&url)?;
        let gene_id = parse_search_id(&response, term)?;
        info!("Resulting ID: {gene_id}");
        Ok(gene_id)
    }

    fn fetch_gene_document(&self, gene_id: &str) -> Result<String, SeqFetchError> {
        let url = self.config.gene_fetch_url(gene_id)?;
        self.transport.get_text(&url)
    }

    fn write_gene_document(&self, document: &str, accession: &str) -> Result<PathBuf, SeqFetchError> {
        Ok(write_document(document, &self.output_dir, accession, XML_EXTENSION)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data_types::strand::Strand;
    use crate::eutils::DEFAULT_EUTILS_URL;
    use crate::test_support::FixtureTransport;

    fn setup(config: &EutilsConfig) -> FixtureTransport {
        let mut transport = FixtureTransport::default();
        transport.add_file(config.search_url("TEST1").unwrap(), "search_hit.xml");
        transport.add_file(config.gene_fetch_url("100").unwrap(), "gene_100.xml");
        transport.add_file(config.search_url("TEST2").unwrap(), "search_empty.xml");
        transport.add_file(config.search_url("BAD1").unwrap(), "search_hit_200.xml");
        transport.add_text(config.gene_fetch_url("200").unwrap(), "<Entrezgene-Set><Entrezgene/></Entrezgene-Set>");
        transport
    }

    #[test]
    fn test_locate() {
        let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
        let transport = setup(&config);
        let tmp_dir = tempfile::tempdir().unwrap();
        let locator = GeneLocator::new(&config, &transport, tmp_dir.path());

        let record = locator.locate("TEST1").unwrap();
        assert_eq!(record.strand(), Strand::Plus);
        assert_eq!(record.interval_start(), 10);
        assert_eq!(record.interval_end(), 19);
        assert_eq!(record.refseq_accession(), "NC_1.1");

        // raw record is saved under the accession
        let saved = std::fs::read_to_string(tmp_dir.path().join("TEST1.xml")).unwrap();
        assert_eq!(saved, std::fs::read_to_string("test_data/eutils/gene_100.xml").unwrap());
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_locate_not_found() {
        let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
        let transport = setup(&config);
        let tmp_dir = tempfile::tempdir().unwrap();
        let locator = GeneLocator::new(&config, &transport, tmp_dir.path());

        let err = locator.locate("TEST2").unwrap_err();
        assert!(err.is_not_found());
        assert!(!tmp_dir.path().join("TEST2.xml").exists());
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_locate_malformed_still_saves() {
        let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
        let transport = setup(&config);
        let tmp_dir = tempfile::tempdir().unwrap();
        let locator = GeneLocator::new(&config, &transport, tmp_dir.path());

        let err = locator.locate("BAD1").unwrap_err();
        assert!(matches!(err, SeqFetchError::MalformedResponse(_)));
        assert!(tmp_dir.path().join("BAD1.xml").exists());
    }

    #[test]
    fn test_locate_transport_error() {
        let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
        let transport = FixtureTransport::default();
        let tmp_dir = tempfile::tempdir().unwrap();
        let locator = GeneLocator::new(&config, &transport, tmp_dir.path());

        // unregistered URLs behave like a dead endpoint
        let err = locator.locate("TEST1").unwrap_err();
        assert!(!err.is_not_found());
    }
}
