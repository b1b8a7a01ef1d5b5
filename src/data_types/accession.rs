
use crate::data_types::strand::Strand;
use crate::errors::SeqFetchError;

/// How the numeric suffix is rebuilt after stepping
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaddingMode {
    /// Plain decimal form, leading zeros are lost (`NM_007` -> `NM_8`)
    #[default]
    Drop,
    /// Left-pad back to the original digit width (`NM_007` -> `NM_008`)
    Keep
}

/// An accession ID split into its fixed prefix and numeric suffix
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Accession {
    /// Everything before the trailing digits, may be empty
    prefix: String,
    /// Parsed suffix value
    number: u64,
    /// Number of digits in the original suffix, including leading zeros
    width: usize
}

impl Accession {
    /// Splits an accession into a prefix and its trailing run of ASCII digits.
    /// # Arguments
    /// * `accession` - the full accession string
    /// # Errors
    /// * if the accession does not end in a digit
    /// * if the suffix does not fit in a u64
    pub fn parse(accession: &str) -> Result<Accession, SeqFetchError> {
        let invalid = |reason: &str| SeqFetchError::InvalidAccession {
            accession: accession.to_string(),
            reason: reason.to_string()
        };

        // the suffix is the trailing run of digits, so digits inside the prefix (AT1G01010) are fine
        let split = accession.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if split == accession.len() {
            return Err(invalid("no numeric suffix"));
        }
        let (prefix, digits) = accession.split_at(split);
        let number: u64 = digits.parse()
            .map_err(|_| invalid("numeric suffix is too large"))?;

        Ok(Accession {
            prefix: prefix.to_string(),
            number,
            width: digits.len()
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Returns the neighboring accession in the direction of the strand, +1 for plus and -1 for minus.
    /// # Arguments
    /// * `strand` - the direction to step
    /// # Errors
    /// * `NotFound` when stepping below zero, there is no previous accession
    /// * `InvalidAccession` when stepping past the largest representable suffix
    pub fn step(&self, strand: Strand) -> Result<Accession, SeqFetchError> {
        let number = match strand {
            Strand::Plus => self.number.checked_add(1)
                .ok_or_else(|| SeqFetchError::InvalidAccession {
                    accession: self.to_string(),
                    reason: "numeric suffix overflows when stepping forward".to_string()
                })?,
            Strand::Minus => self.number.checked_sub(1)
                .ok_or_else(|| SeqFetchError::NotFound(format!("accession before {self}")))?
        };

        Ok(Accession {
            prefix: self.prefix.clone(),
            number,
            width: self.width
        })
    }

    /// Renders the accession with the chosen padding behavior
    pub fn render(&self, padding: PaddingMode) -> String {
        match padding {
            PaddingMode::Drop => format!("{}{}", self.prefix, self.number),
            PaddingMode::Keep => format!("{}{:0width$}", self.prefix, self.number, width = self.width)
        }
    }
}

impl std::fmt::Display for Accession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(PaddingMode::Keep))
    }
}

/// Convenience wrapper that parses, steps, and renders in one go.
/// # Arguments
/// * `accession` - the starting accession
/// * `strand` - the direction to step
/// * `padding` - whether to keep the zero-padding of the suffix
/// # Errors
/// * see `Accession::parse` and `Accession::step`
pub fn next_accession(accession: &str, strand: Strand, padding: PaddingMode) -> Result<String, SeqFetchError> {
    let parsed = Accession::parse(accession)?;
    Ok(parsed.step(strand)?.render(padding))
}
