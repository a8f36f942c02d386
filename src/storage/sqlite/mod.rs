//! Shared `SQLite` infrastructure for the graph store.
//!
//! - [`connection`]: lock acquisition with poison recovery, pragma configuration,
//!   and creation of the database's parent directory

mod connection;

pub use connection::{acquire_lock, configure_connection, ensure_parent_dir};
