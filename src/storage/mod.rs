//! Storage layer.
//!
//! The knowledge graph is an embedded property-graph store kept in a single
//! `SQLite` file. Searches read from it through the [`KnowledgeBackend`] trait.

// Allow significant_drop_tightening - the connection guard lives for one statement.
#![allow(clippy::significant_drop_tightening)]

pub mod graph;
pub mod sqlite;
pub mod traits;

pub use graph::SqliteKnowledgeGraph;
pub use traits::KnowledgeBackend;
