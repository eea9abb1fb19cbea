//! Top-K word frequency ranking.
//!
//! Text is split on whitespace, each token is stripped to its ASCII letters and
//! lowercased, words shorter than three letters are dropped, and the counts are
//! loaded into an arena-backed AVL tree whose in-order traversal is ranked by
//! descending count with alphabetical tie-breaking.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
