//! Domain layer: entities and word-ranking logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod display;
pub mod entities;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod ranking;
pub mod tree;

pub use display::ToTermTree;
pub use entities::WordCount;
pub use error::DomainError;
pub use frequency::{aggregate, FrequencyCounter, FrequencyMap, MIN_WORD_LEN};
pub use normalize::normalize_word;
pub use ranking::{clamp_k, rank, ranking_order};
pub use tree::{InOrderIterator, WordNode, WordTree};
