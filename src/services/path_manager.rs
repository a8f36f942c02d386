//! Well-known storage location for the knowledge graph.
//!
//! The graph lives at `~/.axiomhive/axiom.kuzu`. Callers that need another
//! location (tests, alternate profiles) inject it through
//! [`AxiomConfig::db_path`](crate::AxiomConfig::db_path) instead.

use std::path::{Path, PathBuf};

/// Name of the per-user axiomhive directory.
pub const AXIOM_DIR_NAME: &str = ".axiomhive";

/// Name of the knowledge graph database file.
pub const DB_FILE_NAME: &str = "axiom.kuzu";

/// Manages the storage paths for axiomhive.
#[derive(Debug, Clone)]
pub struct PathManager {
    /// Directory that contains the axiomhive directory (the home dir).
    base_dir: PathBuf,
}

impl PathManager {
    /// Creates a `PathManager` rooted at the user's home directory.
    ///
    /// Falls back to the temporary directory if the home directory cannot be
    /// resolved.
    #[must_use]
    pub fn for_user() -> Self {
        let base_dir = directories::BaseDirs::new().map_or_else(
            || {
                tracing::warn!("Failed to resolve home dir; falling back to temp dir");
                std::env::temp_dir()
            },
            |dirs| dirs.home_dir().to_path_buf(),
        );
        Self { base_dir }
    }

    /// Creates a `PathManager` rooted at `base_dir`.
    #[must_use]
    pub fn for_base(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the axiomhive directory: `{base}/.axiomhive`.
    #[must_use]
    pub fn axiom_dir(&self) -> PathBuf {
        self.base_dir.join(AXIOM_DIR_NAME)
    }

    /// Returns the knowledge graph path: `{base}/.axiomhive/axiom.kuzu`.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.axiom_dir().join(DB_FILE_NAME)
    }
}
