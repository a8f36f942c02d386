//! Graph storage backends for knowledge lookups.
//!
//! | Backend | Use Case | Features |
//! |---------|----------|----------|
//! | [`SqliteKnowledgeGraph`] | Default; embedded | Labeled node table, LIKE matching |
//!
//! # Example
//!
//! ```rust,ignore
//! use axiomhive::storage::graph::SqliteKnowledgeGraph;
//! use axiomhive::storage::KnowledgeBackend;
//!
//! let graph = SqliteKnowledgeGraph::open("/home/me/.axiomhive/axiom.kuzu")?;
//! let texts = graph.query_like("%gravity%", 5)?;
//! ```

mod sqlite;

pub use sqlite::SqliteKnowledgeGraph;
