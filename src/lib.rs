//! # Axiom Hive
//!
//! Tree-of-Thoughts style deep search over a local knowledge graph.
//!
//! A query is fanned out into three fixed branches (historical, theoretical,
//! practical), each branch gathers evidence from the embedded knowledge graph,
//! and the branches are joined into a labeled synthesis.
//!
//! ## Example
//!
//! ```rust,ignore
//! use axiomhive::services::DeepSearchService;
//! use axiomhive::storage::graph::SqliteKnowledgeGraph;
//!
//! let graph = SqliteKnowledgeGraph::open("/tmp/axiom/axiom.kuzu")?;
//! let service = DeepSearchService::new(graph);
//! let outcome = service.search("gravity")?;
//! println!("{}", outcome.synthesis());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::{AxiomConfig, ColorChoice, MatchMode};
pub use models::{Branch, BranchLabel, BranchResult, KnowledgeRecord};
pub use services::{DeepSearchService, EvidenceGatherer, NO_EVIDENCE, SearchOutcome};
pub use storage::KnowledgeBackend;

/// Error type for axiomhive operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `StorageUnavailable` | Database directory cannot be created, file cannot be opened or initialised |
/// | `QueryExecutionFailure` | The knowledge lookup fails inside the engine |
/// | `InvalidInput` | Standard input is not valid UTF-8, a config value is not recognised |
/// | `OperationFailed` | Config file I/O or parsing, logging setup, writing output |
///
/// Zero matching records is not an error.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The knowledge graph could not be created or opened.
    #[error("storage unavailable at {}: {cause}", path.display())]
    StorageUnavailable {
        /// Location of the database.
        path: PathBuf,
        /// The underlying cause.
        cause: String,
    },

    /// A lookup against the knowledge graph failed.
    #[error("query for pattern '{pattern}' failed: {cause}")]
    QueryExecutionFailure {
        /// The LIKE pattern that was being matched.
        pattern: String,
        /// The underlying cause.
        cause: String,
    },

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for axiomhive operations.
pub type Result<T> = std::result::Result<T, Error>;
