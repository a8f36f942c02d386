//! Knowledge backend trait for read-only evidence lookups.
//!
//! # Error Modes and Guarantees
//!
//! | Operation | Empty result | Failure |
//! |-----------|--------------|---------|
//! | `query_like` | `Ok(vec![])` | [`crate::Error::QueryExecutionFailure`] |
//!
//! Row order is whatever the engine yields. Callers must not rely on it being
//! stable across runs or engine versions.

use crate::Result;
use std::sync::Arc;

/// Trait for knowledge graph backends.
///
/// # Implementor Notes
///
/// - Methods use `&self` to enable sharing via `Arc<dyn KnowledgeBackend>`
/// - Use interior mutability (e.g., `Mutex<Connection>`) for connection state
/// - Only nodes labeled [`KNOWLEDGE_LABEL`](crate::models::KNOWLEDGE_LABEL) are matched
pub trait KnowledgeBackend: Send + Sync {
    /// Returns the text of at most `limit` knowledge records whose text
    /// matches the LIKE `pattern` (`%` and `_` are wildcards).
    ///
    /// Zero matches is `Ok` with an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to execute the lookup.
    fn query_like(&self, pattern: &str, limit: usize) -> Result<Vec<String>>;
}

impl<T: KnowledgeBackend + ?Sized> KnowledgeBackend for Arc<T> {
    fn query_like(&self, pattern: &str, limit: usize) -> Result<Vec<String>> {
        (**self).query_like(pattern, limit)
    }
}

impl<T: KnowledgeBackend + ?Sized> KnowledgeBackend for &T {
    fn query_like(&self, pattern: &str, limit: usize) -> Result<Vec<String>> {
        (**self).query_like(pattern, limit)
    }
}
