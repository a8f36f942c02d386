//! Structured logging configuration.

use crate::config::{LogFormat, LoggingSettings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Append to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds the logging configuration from settings.
    ///
    /// `verbose` raises the filter to `debug`. A directive that does not
    /// parse falls back to `warn`.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Self {
        let directive = if verbose {
            "debug"
        } else {
            settings.level.as_str()
        };
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

        Self {
            filter,
            format: settings.format,
            file: settings.file.clone(),
        }
    }
}
