//! Deep search pipeline: decompose, gather, synthesize.

use crate::config::AxiomConfig;
use crate::models::BranchResult;
use crate::services::evidence::EvidenceGatherer;
use crate::services::{decompose, render, synthesize};
use crate::storage::KnowledgeBackend;
use crate::Result;
use tracing::instrument;

/// Result of one deep search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The query as searched.
    pub query: String,
    /// One result per branch, in synthesis order.
    pub results: Vec<BranchResult>,
}

impl SearchOutcome {
    /// Returns the plain synthesis text.
    #[must_use]
    pub fn synthesis(&self) -> String {
        synthesize(&self.results)
    }

    /// Returns the synthesis with styled labels.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.results)
    }
}

/// Runs Tree-of-Thoughts deep searches against a knowledge backend.
///
/// Holds no state between searches beyond the backend itself.
pub struct DeepSearchService<B: KnowledgeBackend> {
    gatherer: EvidenceGatherer<B>,
}

impl<B: KnowledgeBackend> DeepSearchService<B> {
    /// Creates a service with default limit and match mode.
    pub const fn new(backend: B) -> Self {
        Self {
            gatherer: EvidenceGatherer::new(backend),
        }
    }

    /// Creates a service using the limit and match mode from `config`.
    pub fn from_config(backend: B, config: &AxiomConfig) -> Self {
        Self {
            gatherer: EvidenceGatherer::new(backend)
                .with_limit(config.evidence_limit)
                .with_match_mode(config.match_mode),
        }
    }

    /// Searches for `query`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if any branch lookup fails.
    #[instrument(skip_all, fields(query_len = query.len()))]
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let results = self.gatherer.gather(query, decompose(query))?;
        Ok(SearchOutcome {
            query: query.to_string(),
            results,
        })
    }
}
