
use reqwest::Url;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::eutils::EutilsTransport;
use crate::errors::SeqFetchError;

/// In-memory transport keyed on the full request URL, records every request it sees.
/// Unknown URLs fail with an `Io` error like a dead endpoint, same as the copy in tests/pipeline.rs.
#[derive(Default)]
pub struct FixtureTransport {
    responses: BTreeMap<String, String>,
    requests: RefCell<Vec<String>>
}

impl FixtureTransport {
    pub fn add_text(&mut self, url: Url, text: &str) {
        self.responses.insert(url.to_string(), text.to_string());
    }

    /// Registers a file from test_data/eutils as the response
    pub fn add_file(&mut self, url: Url, name: &str) {
        let filename = PathBuf::from("test_data/eutils").join(name);
        let text = std::fs::read_to_string(&filename).unwrap();
        self.responses.insert(url.to_string(), text);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl EutilsTransport for FixtureTransport {
    fn get_text(&self, url: &Url) -> Result<String, SeqFetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(text) => Ok(text.clone()),
            None => Err(SeqFetchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no fixture for {url}")
            )))
        }
    }
}
