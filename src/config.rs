//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wordrank/wordrank.toml`
//! 3. Environment variables: `WORDRANK_*` prefix
//! 4. Command-line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::MIN_WORD_LEN;

/// Default number of words to report.
pub const DEFAULT_TOP_K: i64 = 10;

/// Unified configuration for wordrank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of words to report (non-positive reports nothing)
    pub top_k: i64,
    /// Minimum length of a normalized word to be counted
    pub min_word_len: usize,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_word_len: MIN_WORD_LEN,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → field not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub top_k: Option<i64>,
    pub min_word_len: Option<usize>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for wordrank.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordrank").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wordrank.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            top_k: overlay.top_k.unwrap_or(self.top_k),
            min_word_len: overlay.min_word_len.unwrap_or(self.min_word_len),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), env_source())
    }

    /// Load settings from an explicit global config path and environment source.
    ///
    /// A missing file at `global_path` is not an error; an unreadable or malformed one is.
    pub fn load_from(
        global_path: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        Self::apply_env_overrides(current, env)
    }

    /// Apply WORDRANK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_int("top_k"))? {
            settings.top_k = val;
        }
        if let Some(val) = optional(config.get::<usize>("min_word_len"))? {
            settings.min_word_len = val;
        }
        if let Some(val) = optional(config.get_bool("color"))? {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        format!(
            r#"# wordrank configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/wordrank/wordrank.toml
#   Env:    WORDRANK_* environment variables (e.g. WORDRANK_TOP_K=20)
#   Flags:  -k / --min-len on the command line

# Number of words to report
# top_k = {DEFAULT_TOP_K}

# Words shorter than this (after cleaning) are ignored
# min_word_len = {MIN_WORD_LEN}

# Colored terminal output
# color = true
"#
        )
    }
}

/// Environment source for `WORDRANK_*` variables.
pub fn env_source() -> Environment {
    Environment::with_prefix("WORDRANK")
        .prefix_separator("_")
        .separator("__")
}

/// Unset keys are fine, malformed values are not.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
