//! Knowledge records stored in the graph.

/// Node label under which knowledge records are stored.
pub const KNOWLEDGE_LABEL: &str = "Knowledge";

/// A stored text item in the knowledge graph.
///
/// Records are written by external loaders; searches only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeRecord {
    /// The record text matched by substring lookups.
    pub text: String,
}

impl KnowledgeRecord {
    /// Creates a record from its text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for KnowledgeRecord {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
