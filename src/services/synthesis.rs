//! Synthesis of branch results into the final text block.
//!
//! [`synthesize`] produces the plain contract string. [`render`] produces the
//! same lines with bold red labels; whether escape codes are actually emitted
//! is decided by `colored` (see [`ColorChoice`](crate::ColorChoice)).

use crate::models::BranchResult;
use colored::Colorize;

/// First line of every synthesis.
pub const SYNTHESIS_HEADER: &str = "Tree-of-Thoughts Synthesis:";

/// Joins results as `"<label>: <evidence>"` lines under the header.
#[must_use]
pub fn synthesize(results: &[BranchResult]) -> String {
    assemble(results, |result| result.label.as_str().to_string())
}

/// Like [`synthesize`], with each label styled bold red.
#[must_use]
pub fn render(results: &[BranchResult]) -> String {
    assemble(results, |result| {
        result.label.as_str().bold().red().to_string()
    })
}

fn assemble(results: &[BranchResult], label: impl Fn(&BranchResult) -> String) -> String {
    let lines: Vec<String> = results
        .iter()
        .map(|result| format!("{}: {}", label(result), result.evidence))
        .collect();
    format!("{SYNTHESIS_HEADER}\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{NO_EVIDENCE, decompose};

    fn results(evidence: &str) -> Vec<BranchResult> {
        decompose("gravity")
            .into_iter()
            .map(|branch| BranchResult::new(branch, evidence))
            .collect()
    }

    /// Removes SGR escape sequences (`ESC [ ... m`).
    fn strip_ansi(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_synthesize_no_evidence() {
        assert_eq!(
            synthesize(&results(NO_EVIDENCE)),
            "Tree-of-Thoughts Synthesis:\n\
             Historical: (no local evidence found)\n\
             Theoretical: (no local evidence found)\n\
             Practical: (no local evidence found)"
        );
    }

    #[test]
    fn test_synthesize_shape() {
        let text = synthesize(&results("one fact"));
        assert!(text.starts_with("Tree-of-Thoughts Synthesis:\n"));
        let lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec![
                "Historical: one fact",
                "Theoretical: one fact",
                "Practical: one fact"
            ]
        );
    }

    #[test]
    fn test_synthesize_empty_results() {
        assert_eq!(synthesize(&[]), "Tree-of-Thoughts Synthesis:\n");
    }

    /// Forces `colored` to emit escapes until dropped.
    struct ForcedStyling;

    impl ForcedStyling {
        fn new() -> Self {
            colored::control::set_override(true);
            Self
        }
    }

    impl Drop for ForcedStyling {
        fn drop(&mut self) {
            colored::control::unset_override();
        }
    }

    #[test]
    fn test_render_strips_to_synthesis() {
        let results = results("a\nb");
        let rendered = {
            let _styling = ForcedStyling::new();
            render(&results)
        };

        assert!(rendered.contains('\u{1b}'));
        assert!(!rendered.starts_with('\u{1b}'), "header is never styled");
        assert_eq!(strip_ansi(&rendered), synthesize(&results));
    }
}
