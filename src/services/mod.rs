//! Business logic services.
//!
//! The search pipeline runs in three stages:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Decompose | [`decomposer`] | three labeled sub-questions |
//! | Gather | [`evidence`] | matching record texts per branch |
//! | Synthesize | [`synthesis`] | the labeled text block |
//!
//! [`DeepSearchService`] wires the stages together over a
//! [`KnowledgeBackend`](crate::storage::KnowledgeBackend).

mod deep_search;
pub mod decomposer;
pub mod evidence;
mod path_manager;
pub mod synthesis;

pub use decomposer::decompose;
pub use deep_search::{DeepSearchService, SearchOutcome};
pub use evidence::{EvidenceGatherer, NO_EVIDENCE, join_evidence, like_pattern};
pub use path_manager::{AXIOM_DIR_NAME, DB_FILE_NAME, PathManager};
pub use synthesis::{SYNTHESIS_HEADER, render, synthesize};
