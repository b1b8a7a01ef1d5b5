
/// Errors that can be produced while locating genes and fetching their flanking sequence
#[derive(thiserror::Error, Debug)]
pub enum SeqFetchError {
    /// The search returned no result, this is an expected outcome at the edges of an accession series
    #[error("no search results for \"{0}\"")]
    NotFound(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid accession \"{accession}\": {reason}")]
    InvalidAccession { accession: String, reason: String },
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error
    },
    #[error(transparent)]
    Io(#[from] std::io::Error)
}

impl SeqFetchError {
    /// Returns true if this error is the benign "nothing found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, SeqFetchError::NotFound(_))
    }

    /// The process exit code to use when this error ends a run.
    /// `NotFound` is a normal termination.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            SeqFetchError::NotFound(_) => exitcode::OK,
            SeqFetchError::MalformedResponse(_) |
            SeqFetchError::InvalidAccession { .. } => exitcode::DATAERR,
            SeqFetchError::InvalidUrl(_) => exitcode::USAGE,
            SeqFetchError::Http { .. } => exitcode::UNAVAILABLE,
            SeqFetchError::Io(_) => exitcode::IOERR
        }
    }
}
