//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated tree invariants.
/// The tree operations themselves are total; these only come out of `WordTree::verify`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unbalanced node '{word}': balance factor {balance}")]
    Unbalanced { word: String, balance: i64 },

    #[error("keys out of order at '{word}'")]
    OutOfOrder { word: String },

    #[error("stale height at '{word}': cached {cached}, actual {actual}")]
    StaleHeight {
        word: String,
        cached: usize,
        actual: usize,
    },
}
