//! Frequency aggregation over raw tokens.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::normalize::normalize_word;

/// Words shorter than this are discarded (length ≤ 2).
pub const MIN_WORD_LEN: usize = 3;

/// Key-unique mapping from normalized word to occurrence count.
pub type FrequencyMap = BTreeMap<String, u64>;

/// Incremental word counter.
///
/// Each raw token is normalized; tokens whose normalized form is shorter than
/// the minimum length are dropped.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    min_len: usize,
    counts: FrequencyMap,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(MIN_WORD_LEN)
    }
}

impl FrequencyCounter {
    /// Create a counter. A `min_len` of 0 is treated as 1 so empty words never count.
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len: min_len.max(1),
            counts: FrequencyMap::new(),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Normalize and count one raw token. Returns true if it qualified.
    pub fn add_token(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.len() < self.min_len {
            trace!("add_token: dropping {:?}", raw);
            return false;
        }
        *self.counts.entry(word).or_insert(0) += 1;
        true
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
    }

    /// Number of distinct qualifying words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn into_map(self) -> FrequencyMap {
        self.counts
    }
}

/// Count qualifying words of `tokens`.
pub fn aggregate<I, S>(tokens: I, min_len: usize) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = FrequencyCounter::new(min_len);
    counter.extend(tokens);
    counter.into_map()
}
