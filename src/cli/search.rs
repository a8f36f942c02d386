//! Search CLI command.

use crate::config::AxiomConfig;
use crate::services::DeepSearchService;
use crate::storage::SqliteKnowledgeGraph;
use crate::{Error, Result};
use std::io::{Read, Write};

/// Reads all of `input` and returns it with surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the input is not UTF-8, or
/// [`Error::OperationFailed`] if reading fails.
pub fn read_query(mut input: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|e| Error::OperationFailed {
            operation: "read_stdin".to_string(),
            cause: e.to_string(),
        })?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("query is not valid UTF-8: {e}")))?;
    Ok(text.trim().to_string())
}

/// Search command handler.
///
/// Reads the query, opens the knowledge graph, runs the deep search, and
/// writes the styled synthesis followed by a newline. Nothing is written if
/// any step fails.
pub struct SearchCommand<'a> {
    config: &'a AxiomConfig,
}

impl<'a> SearchCommand<'a> {
    /// Creates a search command over `config`.
    #[must_use]
    pub const fn new(config: &'a AxiomConfig) -> Self {
        Self { config }
    }

    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the graph cannot be
    /// opened or queried, or the output cannot be written.
    pub fn run(&self, input: impl Read, mut output: impl Write) -> Result<()> {
        let query = read_query(input)?;
        tracing::debug!(query_len = query.len(), "read query");

        let graph = SqliteKnowledgeGraph::open(&self.config.db_path)?;
        let service = DeepSearchService::from_config(graph, self.config);
        let outcome = service.search(&query)?;

        writeln!(output, "{}", outcome.render())
            .and_then(|()| output.flush())
            .map_err(|e| Error::OperationFailed {
                operation: "write_output".to_string(),
                cause: e.to_string(),
            })
    }
}
