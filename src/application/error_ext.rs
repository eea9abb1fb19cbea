//! Error conversion helpers for file I/O
//!
//! Provides an extension trait for attaching the offending path to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with path context.
pub trait IoResultExt<T> {
    /// Classify an error from opening `path`.
    ///
    /// # Example
    /// ```ignore
    /// let reader = fs.open(&path).open_context(&path)?;
    /// ```
    fn open_context(self, path: &Path) -> ApplicationResult<T>;

    /// Classify an error from reading an already opened `path`.
    fn read_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn open_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}
