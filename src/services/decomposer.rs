//! Query decomposition into fixed Tree-of-Thoughts branches.

use crate::models::{Branch, BranchLabel};

/// Splits `query` into the historical, theoretical, and practical branches,
/// in that order.
///
/// Total for any input, including the empty string.
#[must_use]
pub fn decompose(query: &str) -> [Branch; 3] {
    let labels = *BranchLabel::all();
    labels.map(|label| Branch::new(label, query))
}
