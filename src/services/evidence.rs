//! Evidence gathering for decomposed branches.
//!
//! Each branch issues one LIKE lookup against the knowledge backend. In the
//! default [`MatchMode::Original`] every branch matches the user's original
//! query, so all three branches see the same rows;
//! [`MatchMode::PerBranch`] matches each branch's own sub-question instead.
//!
//! The query text is wrapped in `%` without escaping, so `%` and `_` typed by
//! the user act as wildcards.

use crate::config::{DEFAULT_EVIDENCE_LIMIT, MatchMode};
use crate::models::{Branch, BranchResult};
use crate::storage::KnowledgeBackend;
use crate::Result;
use tracing::instrument;

/// Evidence text used when a branch matched no records.
pub const NO_EVIDENCE: &str = "(no local evidence found)";

/// Wraps `text` in LIKE wildcards for a substring match.
#[must_use]
pub fn like_pattern(text: &str) -> String {
    format!("%{text}%")
}

/// Joins matched record texts with newlines, or returns [`NO_EVIDENCE`].
#[must_use]
pub fn join_evidence(rows: &[String]) -> String {
    if rows.is_empty() {
        NO_EVIDENCE.to_string()
    } else {
        rows.join("\n")
    }
}

/// Gathers evidence for branches from a knowledge backend.
pub struct EvidenceGatherer<B: KnowledgeBackend> {
    backend: B,
    limit: usize,
    match_mode: MatchMode,
}

impl<B: KnowledgeBackend> EvidenceGatherer<B> {
    /// Creates a gatherer with the default limit and match mode.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            limit: DEFAULT_EVIDENCE_LIMIT,
            match_mode: MatchMode::Original,
        }
    }

    /// Sets the per-branch row limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the match mode.
    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Returns a reference to the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Looks up evidence for every branch, in order.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if any lookup fails; no partial results
    /// are returned.
    #[instrument(skip_all, fields(limit = self.limit, match_mode = ?self.match_mode))]
    pub fn gather(
        &self,
        original_query: &str,
        branches: impl IntoIterator<Item = Branch>,
    ) -> Result<Vec<BranchResult>> {
        branches
            .into_iter()
            .map(|branch| -> Result<BranchResult> {
                let pattern = match self.match_mode {
                    MatchMode::Original => like_pattern(original_query),
                    MatchMode::PerBranch => like_pattern(&branch.subquery),
                };
                let rows = self.backend.query_like(&pattern, self.limit)?;
                tracing::debug!(label = %branch.label, rows = rows.len(), "gathered evidence");
                Ok(BranchResult::new(branch, join_evidence(&rows)))
            })
            .collect()
    }
}
