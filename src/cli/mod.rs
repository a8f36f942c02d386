//! CLI command implementations.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Read a query from stdin and print its Tree-of-Thoughts synthesis |
//!
//! # Example Usage
//!
//! ```bash
//! echo "gravity" | axiomhive
//! echo "gravity" | axiomhive --per-branch --limit 3
//! ```

mod search;

pub use search::{SearchCommand, read_query};
