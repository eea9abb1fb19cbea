//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::WordRankService;
use crate::config::Settings;
use crate::infrastructure::traits::{
    ConsoleReporter, FileSystem, RealFileSystem, SilentReporter, StatusReporter,
};

/// Container holding settings and the I/O collaborators services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Progress message sink
    pub status: Arc<dyn StatusReporter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// `quiet` swaps the console reporter for one that drops all messages.
    pub fn new(settings: Settings, quiet: bool) -> Self {
        let status: Arc<dyn StatusReporter> = if quiet {
            Arc::new(SilentReporter)
        } else {
            Arc::new(ConsoleReporter)
        };
        Self::with_deps(settings, Arc::new(RealFileSystem), status)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        status: Arc<dyn StatusReporter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            status,
        }
    }

    /// Word ranking service configured from settings.
    pub fn word_rank_service(&self) -> WordRankService {
        WordRankService::new(Arc::clone(&self.fs), Arc::clone(&self.status))
            .with_min_len(self.settings.min_word_len)
    }
}
