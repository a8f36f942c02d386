//! Configuration management.

use crate::services::PathManager;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default per-branch row limit.
pub const DEFAULT_EVIDENCE_LIMIT: usize = 5;

/// Main configuration for axiomhive.
#[derive(Debug, Clone)]
pub struct AxiomConfig {
    /// Path to the knowledge graph database.
    pub db_path: PathBuf,
    /// Maximum number of records gathered per branch.
    pub evidence_limit: usize,
    /// Which text each branch matches against.
    pub match_mode: MatchMode,
    /// Label styling policy.
    pub color: ColorChoice,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Which text a branch's lookup is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Every branch matches the original query text.
    #[default]
    Original,
    /// Each branch matches its own sub-question text.
    PerBranch,
}

/// When to style branch labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Style when the terminal supports it.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

impl ColorChoice {
    /// Applies this choice to the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `warn` or `axiomhive=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Database path.
    pub db_path: Option<String>,
    /// Per-branch row limit.
    pub evidence_limit: Option<usize>,
    /// Match mode.
    pub match_mode: Option<MatchMode>,
    /// Label styling.
    pub color: Option<ColorChoice>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// Filter directive.
    pub level: Option<String>,
    /// Output format.
    pub format: Option<LogFormat>,
    /// Log file path.
    pub file: Option<String>,
}

impl Default for AxiomConfig {
    fn default() -> Self {
        Self {
            db_path: PathManager::for_user().db_path(),
            evidence_limit: DEFAULT_EVIDENCE_LIMIT,
            match_mode: MatchMode::default(),
            color: ColorChoice::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AxiomConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::from_toml(&contents).map_err(|e| match e {
            crate::Error::OperationFailed { operation, cause } => crate::Error::OperationFailed {
                operation,
                cause: format!("{}: {cause}", path.display()),
            },
            other => other,
        })
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config file.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/axiomhive/` on macOS)
    /// 2. XDG config dir (`~/.config/axiomhive/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if the first config file found cannot be read or
    /// parsed.
    pub fn load_default() -> crate::Result<Self> {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Ok(Self::default());
        };

        let platform_config = base_dirs.config_dir().join("axiomhive").join("config.toml");
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("axiomhive")
            .join("config.toml");

        Self::load_first(&[platform_config, xdg_config])
    }

    /// Loads the first existing file among `candidates`, or the defaults.
    fn load_first(candidates: &[PathBuf]) -> crate::Result<Self> {
        candidates
            .iter()
            .find(|path| path.exists())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_file(path))
    }

    /// Converts a `ConfigFile` to `AxiomConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(db_path) = file.db_path {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(limit) = file.evidence_limit {
            config.evidence_limit = limit;
        }
        if let Some(mode) = file.match_mode {
            config.match_mode = mode;
        }
        if let Some(color) = file.color {
            config.color = color;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                config.logging.level = level;
            }
            if let Some(format) = logging.format {
                config.logging.format = format;
            }
            config.logging.file = logging.file.map(PathBuf::from);
        }

        config
    }

    /// Sets the database path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Sets the per-branch row limit.
    #[must_use]
    pub fn with_evidence_limit(mut self, limit: usize) -> Self {
        self.evidence_limit = limit;
        self
    }

    /// Sets the match mode.
    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Sets the label styling policy.
    #[must_use]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AxiomConfig::default();
        assert_eq!(config.evidence_limit, 5);
        assert_eq!(config.match_mode, MatchMode::Original);
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.logging, LoggingSettings::default());
        assert!(config.db_path.ends_with(".axiomhive/axiom.kuzu"));
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = AxiomConfig::from_toml(
            r#"
            db_path = "/srv/axiom/graph.kuzu"
            evidence_limit = 2
            match_mode = "per-branch"
            color = "never"

            [logging]
            level = "debug"
            format = "json"
            file = "/tmp/axiom.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/srv/axiom/graph.kuzu"));
        assert_eq!(config.evidence_limit, 2);
        assert_eq!(config.match_mode, MatchMode::PerBranch);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/axiom.log")));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AxiomConfig::from_toml("").unwrap();
        assert_eq!(config.evidence_limit, DEFAULT_EVIDENCE_LIMIT);
        assert_eq!(config.match_mode, MatchMode::Original);
    }

    #[test]
    fn test_unknown_match_mode_rejected() {
        let err = AxiomConfig::from_toml(r#"match_mode = "sideways""#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OperationFailed { ref operation, .. } if operation == "parse_config_file"
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AxiomConfig::from_toml("prune_threshold = 0.5").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AxiomConfig::load_from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OperationFailed { ref operation, .. } if operation == "read_config_file"
        ));
    }

    #[test]
    fn test_load_first_without_files_is_default() {
        let temp = tempfile::tempdir().unwrap();
        let config = AxiomConfig::load_first(&[temp.path().join("absent.toml")]).unwrap();
        assert_eq!(config.evidence_limit, DEFAULT_EVIDENCE_LIMIT);
    }

    #[test]
    fn test_load_first_uses_first_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let second = temp.path().join("second.toml");
        std::fs::write(&second, "evidence_limit = 3\n").unwrap();

        let config =
            AxiomConfig::load_first(&[temp.path().join("absent.toml"), second]).unwrap();
        assert_eq!(config.evidence_limit, 3);
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        let broken = temp.path().join("config.toml");
        std::fs::write(&broken, "evidence_limit = \"many\"\n").unwrap();

        let err = AxiomConfig::load_first(std::slice::from_ref(&broken)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OperationFailed { ref operation, ref cause }
                if operation == "parse_config_file" && cause.contains("config.toml")
        ));
    }

    #[test]
    fn test_builders() {
        let config = AxiomConfig::new()
            .with_db_path("/tmp/x.kuzu")
            .with_evidence_limit(9)
            .with_match_mode(MatchMode::PerBranch)
            .with_color(ColorChoice::Always);
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.kuzu"));
        assert_eq!(config.evidence_limit, 9);
        assert_eq!(config.match_mode, MatchMode::PerBranch);
        assert_eq!(config.color, ColorChoice::Always);
    }
}
