
use reqwest::Url;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use seqfetch::data_types::accession::PaddingMode;
use seqfetch::data_types::strand::Strand;
use seqfetch::errors::SeqFetchError;
use seqfetch::eutils::{DEFAULT_EUTILS_URL, EutilsConfig, EutilsTransport};
use seqfetch::pipeline::{PipelineOptions, Span, run_pipeline};

/// Serves fixture files for known URLs and records the requests, unknown URLs fail like a dead endpoint
#[derive(Default)]
struct FixtureTransport {
    responses: BTreeMap<String, PathBuf>,
    requests: RefCell<Vec<String>>
}

impl FixtureTransport {
    fn add(&mut self, url: Url, name: &str) {
        self.responses.insert(url.to_string(), PathBuf::from("test_data/eutils").join(name));
    }
}

impl EutilsTransport for FixtureTransport {
    fn get_text(&self, url: &Url) -> Result<String, SeqFetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(filename) => Ok(std::fs::read_to_string(filename)?),
            None => Err(SeqFetchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no fixture for {url}")
            )))
        }
    }
}

fn test_options(tmp_dir: &tempfile::TempDir) -> PipelineOptions {
    PipelineOptions {
        output_dir: tmp_dir.path().to_path_buf(),
        padding: PaddingMode::Drop
    }
}

#[test]
fn test_end_to_end() {
    let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
    let nuc_url = config.nucleotide_fetch_url("556503834", Strand::Plus, 10, 50).unwrap();

    let mut transport = FixtureTransport::default();
    transport.add(config.search_url("TEST1").unwrap(), "search_hit.xml");
    transport.add(config.gene_fetch_url("100").unwrap(), "gene_100.xml");
    transport.add(config.search_url("TEST2").unwrap(), "search_hit_200.xml");
    transport.add(config.gene_fetch_url("200").unwrap(), "gene_200.xml");
    transport.add(nuc_url.clone(), "nuccore_span.fasta");

    let tmp_dir = tempfile::tempdir().unwrap();
    let outcome = run_pipeline("TEST1", &config, &transport, &test_options(&tmp_dir)).unwrap();

    assert_eq!(outcome.next_accession, "TEST2");
    assert_eq!(outcome.first_gene.interval_end(), 19);
    assert_eq!(outcome.second_gene.interval_end(), 60);
    assert_eq!(outcome.span, Span { start: 10, end: 50, strand: Strand::Plus });

    // the nucleotide request is the last one and carries the span
    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 5);
    assert_eq!(requests[4], nuc_url.to_string());
    assert!(requests[4].contains("strand=1&seq_start=10&seq_stop=50"));

    // outputs: both raw records and the FASTA lines
    assert!(tmp_dir.path().join("TEST1.xml").exists());
    assert!(tmp_dir.path().join("TEST2.xml").exists());
    assert_eq!(outcome.output_file, tmp_dir.path().join("NC_1.1.txt"));
    let written = std::fs::read_to_string(&outcome.output_file).unwrap();
    let expected = std::fs::read_to_string("test_data/eutils/nuccore_span.fasta").unwrap();
    assert_eq!(written, expected);
    assert!(written.starts_with('>'));
    assert_eq!(outcome.sequence_length, Some(81));
}

#[test]
fn test_no_search_result() {
    let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
    let mut transport = FixtureTransport::default();
    transport.add(config.search_url("TEST1").unwrap(), "search_empty.xml");

    let tmp_dir = tempfile::tempdir().unwrap();
    let err = run_pipeline("TEST1", &config, &transport, &test_options(&tmp_dir)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.exit_code(), exitcode::OK);

    // nothing was written at all
    assert_eq!(std::fs::read_dir(tmp_dir.path()).unwrap().count(), 0);
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn test_next_gene_missing() {
    let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
    let mut transport = FixtureTransport::default();
    transport.add(config.search_url("TEST1").unwrap(), "search_hit.xml");
    transport.add(config.gene_fetch_url("100").unwrap(), "gene_100.xml");
    transport.add(config.search_url("TEST2").unwrap(), "search_empty.xml");

    let tmp_dir = tempfile::tempdir().unwrap();
    let err = run_pipeline("TEST1", &config, &transport, &test_options(&tmp_dir)).unwrap_err();
    assert!(err.is_not_found());
    assert!(!tmp_dir.path().join("NC_1.1.txt").exists());
}

#[test]
fn test_invalid_accession() {
    let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
    let mut transport = FixtureTransport::default();
    transport.add(config.search_url("thrL").unwrap(), "search_hit.xml");
    transport.add(config.gene_fetch_url("100").unwrap(), "gene_100.xml");

    // the gene resolves but the name has no numeric suffix to step
    let tmp_dir = tempfile::tempdir().unwrap();
    let err = run_pipeline("thrL", &config, &transport, &test_options(&tmp_dir)).unwrap_err();
    assert!(matches!(err, SeqFetchError::InvalidAccession { .. }));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn test_unreachable_endpoint() {
    let config = EutilsConfig::new(DEFAULT_EUTILS_URL).unwrap();
    let transport = FixtureTransport::default();

    let tmp_dir = tempfile::tempdir().unwrap();
    let err = run_pipeline("TEST1", &config, &transport, &test_options(&tmp_dir)).unwrap_err();
    assert!(matches!(err, SeqFetchError::Io(_)));
    assert_eq!(err.exit_code(), exitcode::IOERR);
    assert_eq!(transport.requests.borrow().len(), 1);
}
