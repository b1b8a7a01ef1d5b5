
use bio::io::fasta;

/// Raw FASTA text returned by a nucleotide efetch
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FastaResponse {
    text: String
}

impl FastaResponse {
    pub fn new(text: String) -> FastaResponse {
        FastaResponse { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the response on newlines; a trailing newline does not produce an empty final entry
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// The first line, which should be the `>` header
    pub fn header(&self) -> Option<&str> {
        self.text.lines().next()
    }

    /// Joins all sequence lines of the first record into one sequence.
    /// # Errors
    /// * if the text cannot be read as FASTA
    pub fn sequence(&self) -> Result<Option<Vec<u8>>, std::io::Error> {
        let reader = fasta::Reader::new(self.text.as_bytes());
        match reader.records().next() {
            Some(record) => Ok(Some(record?.seq().to_vec())),
            None => Ok(None)
        }
    }
}
