//! Property-based tests for decomposition, evidence joining, and synthesis.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Decomposition always yields three branches in fixed order
//! - Every sub-question embeds the query
//! - Evidence joining round-trips newline-free rows
//! - Synthesis always carries the header and one line per branch

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use axiomhive::services::{SYNTHESIS_HEADER, decompose, join_evidence, synthesize};
use axiomhive::{BranchLabel, BranchResult, NO_EVIDENCE};
use proptest::prelude::*;

proptest! {
    /// Property: three branches, labels in fixed order.
    #[test]
    fn prop_decompose_fixed_labels(query in ".*") {
        let branches = decompose(&query);
        let labels: Vec<BranchLabel> = branches.iter().map(|b| b.label).collect();
        prop_assert_eq!(labels, BranchLabel::all().to_vec());
    }

    /// Property: each sub-question ends with the query.
    #[test]
    fn prop_subqueries_contain_query(query in ".*") {
        for branch in decompose(&query) {
            prop_assert!(branch.subquery.contains(&query));
            prop_assert!(branch.subquery.ends_with(&query));
            prop_assert!(branch.subquery.starts_with(branch.label.template()));
        }
    }

    /// Property: joined rows split back into the same rows.
    #[test]
    fn prop_join_evidence_splits_back(rows in prop::collection::vec("[^\n]{1,20}", 1..5)) {
        let joined = join_evidence(&rows);
        let split: Vec<String> = joined.split('\n').map(ToString::to_string).collect();
        prop_assert_eq!(split, rows);
    }

    /// Property: synthesis has the header and exactly three branch lines.
    #[test]
    fn prop_synthesis_shape(query in "[^\n\r]*", evidence in "[^\n\r]{1,40}") {
        let results: Vec<BranchResult> = decompose(&query)
            .into_iter()
            .map(|branch| BranchResult::new(branch, evidence.clone()))
            .collect();
        let text = synthesize(&results);

        let header = format!("{SYNTHESIS_HEADER}\n");
        prop_assert!(text.starts_with(&header));
        let body = &text[header.len()..];
        let lines: Vec<&str> = body.split('\n').collect();
        prop_assert_eq!(lines.len(), 3);
        for (line, label) in lines.iter().zip(BranchLabel::all()) {
            prop_assert_eq!(*line, format!("{label}: {evidence}"));
        }
    }
}

#[test]
fn test_empty_rows_join_to_sentinel() {
    assert_eq!(join_evidence(&[]), NO_EVIDENCE);
}
