//! Tree-of-Thoughts branch types.

use std::fmt;

/// The three fixed decomposition categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchLabel {
    /// Historical context of the query.
    Historical,
    /// Theoretical principles behind the query.
    Theoretical,
    /// Practical examples or proofs for the query.
    Practical,
}

impl BranchLabel {
    /// Returns all labels in synthesis order.
    #[must_use]
    pub const fn all() -> &'static [Self; 3] {
        &[Self::Historical, Self::Theoretical, Self::Practical]
    }

    /// Returns the label as it appears in the synthesis.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "Historical",
            Self::Theoretical => "Theoretical",
            Self::Practical => "Practical",
        }
    }

    /// Returns the question prefix the query is appended to.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Historical => "What is the historical context of: ",
            Self::Theoretical => "What are the theoretical principles behind: ",
            Self::Practical => "What practical examples or proofs exist for: ",
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled sub-question derived from the user's query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Which category this branch explores.
    pub label: BranchLabel,
    /// The sub-question text.
    pub subquery: String,
}

impl Branch {
    /// Builds the branch for `label` by appending `query` to its template.
    #[must_use]
    pub fn new(label: BranchLabel, query: &str) -> Self {
        Self {
            label,
            subquery: format!("{}{query}", label.template()),
        }
    }
}

/// A branch together with the evidence gathered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchResult {
    /// Which category this result belongs to.
    pub label: BranchLabel,
    /// The sub-question text.
    pub subquery: String,
    /// Newline-joined matching record texts, or the no-evidence sentinel.
    pub evidence: String,
}

impl BranchResult {
    /// Attaches evidence to a branch.
    #[must_use]
    pub fn new(branch: Branch, evidence: impl Into<String>) -> Self {
        Self {
            label: branch.label,
            subquery: branch.subquery,
            evidence: evidence.into(),
        }
    }
}
