//! I/O boundary traits for testability
//!
//! These traits abstract file access and status output, allowing services
//! to be tested with in-memory implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use colored::Colorize;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Open a file for buffered reading. The handle is released when dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Receiver of human-readable progress messages.
///
/// Not part of any return contract: implementations may print, record or drop them.
pub trait StatusReporter: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Prints info to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        println!("{}: {}", "Info".cyan(), msg);
    }

    fn error(&self, msg: &str) {
        eprintln!("{}: {}", "Error".red().bold(), msg);
    }
}

/// Drops every message (`--quiet`).
#[derive(Debug, Default)]
pub struct SilentReporter;

impl StatusReporter for SilentReporter {
    fn info(&self, _msg: &str) {}

    fn error(&self, _msg: &str) {}
}
