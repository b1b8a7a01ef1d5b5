
use log::{debug, trace};
use reqwest::Url;

use crate::data_types::strand::Strand;
use crate::errors::SeqFetchError;

// E-utilities reference: https://www.ncbi.nlm.nih.gov/books/NBK25499/

/// Default base for all E-utilities requests
pub const DEFAULT_EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

const ESEARCH_ENDPOINT: &str = "esearch.fcgi";
const EFETCH_ENDPOINT: &str = "efetch.fcgi";

/// Builds the request URLs for the three E-utilities calls we make
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EutilsConfig {
    /// Always ends in '/' so endpoints join underneath it
    base_url: Url
}

impl EutilsConfig {
    /// Creates a config from a base URL string.
    /// # Arguments
    /// * `base_url` - absolute URL of the E-utilities directory
    /// # Errors
    /// * if the URL does not parse or cannot have a path
    pub fn new(base_url: &str) -> Result<EutilsConfig, SeqFetchError> {
        let with_slash = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let parsed = Url::parse(&with_slash)
            .map_err(|e| SeqFetchError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(SeqFetchError::InvalidUrl(format!("{base_url}: cannot be used as a base URL")));
        }
        Ok(EutilsConfig { base_url: parsed })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// esearch against the gene database with a free-text term
    pub fn search_url(&self, term: &str) -> Result<Url, SeqFetchError> {
        self.endpoint(ESEARCH_ENDPOINT, &[
            ("db", "gene"),
            ("term", term)
        ])
    }

    /// efetch of a full Entrez Gene record as XML
    pub fn gene_fetch_url(&self, gene_id: &str) -> Result<Url, SeqFetchError> {
        self.endpoint(EFETCH_ENDPOINT, &[
            ("db", "gene"),
            ("retmode", "xml"),
            ("id", gene_id.trim())
        ])
    }

    /// efetch of a nucleotide range as FASTA text
    pub fn nucleotide_fetch_url(&self, reference_id: &str, strand: Strand, start: u64, stop: u64) -> Result<Url, SeqFetchError> {
        let strand_code = strand.code().to_string();
        let seq_start = start.to_string();
        let seq_stop = stop.to_string();
        self.endpoint(EFETCH_ENDPOINT, &[
            ("db", "nuccore"),
            ("id", reference_id),
            ("strand", strand_code.as_str()),
            ("seq_start", seq_start.as_str()),
            ("seq_stop", seq_stop.as_str()),
            ("rettype", "fasta"),
            ("retmode", "text")
        ])
    }

    fn endpoint(&self, name: &str, params: &[(&str, &str)]) -> Result<Url, SeqFetchError> {
        let mut url = self.base_url.join(name)
            .map_err(|e| SeqFetchError::InvalidUrl(format!("{name}: {e}")))?;
        url.query_pairs_mut().extend_pairs(params.iter());
        Ok(url)
    }
}

/// Anything that can turn a GET request into a response body
pub trait EutilsTransport {
    /// Issues a GET and returns the body as text.
    /// # Errors
    /// * on connection failures or non-success status codes
    fn get_text(&self, url: &Url) -> Result<String, SeqFetchError>;
}

/// Blocking HTTP transport, no timeout and no retries
pub struct HttpTransport {
    client: reqwest::blocking::Client
}

impl HttpTransport {
    /// Builds the client with our tool name as the user agent.
    /// # Errors
    /// * if the TLS backend fails to initialize
    pub fn new() -> Result<HttpTransport, SeqFetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(env!("CARGO_PKG_NAME"))
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| SeqFetchError::Http { url: String::new(), source: e })?;
        Ok(HttpTransport { client })
    }
}

impl EutilsTransport for HttpTransport {
    fn get_text(&self, url: &Url) -> Result<String, SeqFetchError> {
        debug!("GET {url}");
        let wrap = |e: reqwest::Error| SeqFetchError::Http { url: url.to_string(), source: e };
        let text = self.client.get(url.clone())
            .send()
            .map_err(wrap)?
            .error_for_status()
            .map_err(wrap)?
            .text()
            .map_err(wrap)?;
        debug!("Response received.");
        trace!("{text}");
        Ok(text)
    }
}
