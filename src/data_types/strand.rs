
use serde::{Deserialize, Serialize};

/// Orientation of a gene on its reference sequence
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Plus,
    Minus
}

impl Strand {
    /// The numeric code nuccore efetch expects for `strand=`
    pub fn code(&self) -> u8 {
        match self {
            Strand::Plus => 1,
            Strand::Minus => 2
        }
    }

    /// Picks the coordinate that bounds a span on this strand: the end for minus, the start for plus.
    /// # Arguments
    /// * `start` - the interval start
    /// * `end` - the interval end
    pub fn boundary(&self, start: u64, end: u64) -> u64 {
        match self {
            Strand::Plus => start,
            Strand::Minus => end
        }
    }
}
