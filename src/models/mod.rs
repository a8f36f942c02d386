//! Data models for axiomhive.
//!
//! Knowledge records live in the graph store; branches and branch results are
//! transient and exist only for the duration of one search.

mod branch;
mod knowledge;

pub use branch::{Branch, BranchLabel, BranchResult};
pub use knowledge::{KNOWLEDGE_LABEL, KnowledgeRecord};
