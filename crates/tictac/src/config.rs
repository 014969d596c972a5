//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
///
/// ```toml
/// halt_on_win = true
/// show_labels = true
/// log_filter = "tictac=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct TerminalConfig {
    /// End the session as soon as a move wins.
    #[serde(default)]
    halt_on_win: bool,

    /// Draw empty cells with their index.
    #[serde(default = "default_show_labels")]
    show_labels: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_show_labels() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            halt_on_win: false,
            show_labels: default_show_labels(),
            log_filter: default_log_filter(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, ConfigErrorKind::Unreadable, e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(path, ConfigErrorKind::InvalidToml, e.to_string()))?;

        info!(halt_on_win = config.halt_on_win, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// What went wrong with a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("could not be read")]
    Unreadable,
    /// The file is not valid TOML for [`TerminalConfig`].
    #[display("is not a valid config")]
    InvalidToml,
}

/// A config file that could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Config file {} {}: {} (at {}:{})", path, kind, detail, file, line)]
pub struct ConfigError {
    /// The offending file.
    pub path: String,
    /// Failure category.
    pub kind: ConfigErrorKind,
    /// Underlying reader or parser message.
    pub detail: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a config error for `path`, recording the caller's location.
    #[track_caller]
    #[instrument(skip(path, detail), fields(path = %path.display()))]
    pub fn new(path: &Path, kind: ConfigErrorKind, detail: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.display().to_string(),
            kind,
            detail: detail.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
