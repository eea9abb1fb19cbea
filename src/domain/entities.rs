//! Domain entities: core data structures

use std::fmt;

/// One distinct normalized word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    /// Lowercase alphabetic word
    pub word: String,
    /// Number of occurrences
    pub freq: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, freq: u64) -> Self {
        Self {
            word: word.into(),
            freq,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.freq)
    }
}

impl From<(String, u64)> for WordCount {
    fn from((word, freq): (String, u64)) -> Self {
        Self { word, freq }
    }
}
