//! `SQLite` graph backend for knowledge records.
//!
//! Nodes are rows of `graph_nodes`, each carrying a label. Knowledge records
//! are nodes labeled `Knowledge` whose `text` property is the record body.

use crate::models::{KNOWLEDGE_LABEL, KnowledgeRecord};
use crate::storage::sqlite::{acquire_lock, configure_connection, ensure_parent_dir};
use crate::storage::traits::KnowledgeBackend;
use crate::{Error, Result};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::instrument;

/// `SQLite`-based knowledge graph.
///
/// # Concurrency Model
///
/// Uses a `Mutex<Connection>` so the graph can be shared behind an `Arc`.
/// Access from other processes (e.g. a loader) is arbitrated by `SQLite`'s own
/// file locking with a 5-second busy timeout.
///
/// # Schema
///
/// - `graph_nodes(id, label, text)`: one row per node
pub struct SqliteKnowledgeGraph {
    /// Connection to the `SQLite` database.
    conn: Mutex<Connection>,
    /// Path to the database (None for in-memory).
    db_path: Option<PathBuf>,
}

impl SqliteKnowledgeGraph {
    /// Opens the knowledge graph at `db_path`, creating the parent directory
    /// and the database file if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the directory cannot be created,
    /// or the file cannot be opened or is not a usable database.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        ensure_parent_dir(&db_path)?;

        let conn = Connection::open(&db_path).map_err(|e| Error::StorageUnavailable {
            path: db_path.clone(),
            cause: e.to_string(),
        })?;

        let graph = Self {
            conn: Mutex::new(conn),
            db_path: Some(db_path),
        };
        graph.initialize()?;

        tracing::info!(path = ?graph.db_path, "opened knowledge graph");
        Ok(graph)
    }

    /// Creates an in-memory knowledge graph (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::StorageUnavailable {
            path: PathBuf::from(":memory:"),
            cause: e.to_string(),
        })?;

        let graph = Self {
            conn: Mutex::new(conn),
            db_path: None,
        };
        graph.initialize()?;
        Ok(graph)
    }

    /// Returns the database path.
    #[must_use]
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Initializes the node table so a fresh database answers lookups with
    /// zero rows. A database that already has the table is left untouched.
    fn initialize(&self) -> Result<()> {
        let conn = acquire_lock(&self.conn);
        configure_connection(&conn);

        let existing: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'graph_nodes'",
                [],
                |row| row.get(0),
            )
            .map_err(|e| Error::StorageUnavailable {
                path: self.location(),
                cause: e.to_string(),
            })?;
        if existing > 0 {
            return Ok(());
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS graph_nodes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                text TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_graph_nodes_label ON graph_nodes(label);",
        )
        .map_err(|e| Error::StorageUnavailable {
            path: self.location(),
            cause: e.to_string(),
        })
    }

    fn location(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(":memory:"))
    }

    /// Stores a knowledge record and returns its node id.
    ///
    /// Searches never call this; it serves loaders and fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_record(&self, record: &KnowledgeRecord) -> Result<i64> {
        let conn = acquire_lock(&self.conn);
        conn.execute(
            "INSERT INTO graph_nodes (label, text) VALUES (?1, ?2)",
            params![KNOWLEDGE_LABEL, record.text],
        )
        .map_err(|e| Error::OperationFailed {
            operation: "insert_knowledge_record".to_string(),
            cause: e.to_string(),
        })?;
        Ok(conn.last_insert_rowid())
    }

}

impl KnowledgeBackend for SqliteKnowledgeGraph {
    #[instrument(skip(self), fields(rows))]
    fn query_like(&self, pattern: &str, limit: usize) -> Result<Vec<String>> {
        let failure = |e: rusqlite::Error| Error::QueryExecutionFailure {
            pattern: pattern.to_string(),
            cause: e.to_string(),
        };
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let conn = acquire_lock(&self.conn);
        let mut stmt = conn
            .prepare("SELECT text FROM graph_nodes WHERE label = ?1 AND text LIKE ?2 LIMIT ?3")
            .map_err(failure)?;
        let texts = stmt
            .query_map(params![KNOWLEDGE_LABEL, pattern, limit], |row| {
                row.get::<_, String>(0)
            })
            .map_err(failure)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(failure)?;

        metrics::counter!("knowledge_lookups_total").increment(1);
        tracing::Span::current().record("rows", texts.len());
        Ok(texts)
    }
}
