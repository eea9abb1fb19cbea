//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, StatusReporter)
//! but are themselves concrete structs, not traits.

mod word_rank;

pub use word_rank::WordRankService;
