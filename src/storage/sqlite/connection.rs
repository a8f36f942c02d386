//! Shared connection handling for the `SQLite` graph store.

use crate::{Error, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Helper to acquire mutex lock with poison recovery.
///
/// If the mutex is poisoned (due to a panic in a previous critical section),
/// the inner value is recovered and a warning is logged.
pub fn acquire_lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("SQLite mutex was poisoned, recovering");
            metrics::counter!("sqlite_mutex_poison_recovery_total").increment(1);
            poisoned.into_inner()
        },
    }
}

/// Configures a `SQLite` connection.
///
/// - **NORMAL synchronous**
/// - **`busy_timeout`**: waits up to 5 seconds for locks held by other processes
///
/// Only per-connection settings are applied. The journal mode is stored in
/// the database file and belongs to whoever created it.
pub fn configure_connection(conn: &Connection) {
    let _ = conn.pragma_update(None, "synchronous", "NORMAL");
    let _ = conn.pragma_update(None, "busy_timeout", "5000");
}

/// Creates the parent directory of `path` (recursively) if it is missing.
///
/// # Errors
///
/// Returns [`Error::StorageUnavailable`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(parent).map_err(|e| Error::StorageUnavailable {
        path: path.to_path_buf(),
        cause: format!("cannot create {}: {e}", parent.display()),
    })?;
    tracing::info!(dir = %parent.display(), "created knowledge graph directory");
    Ok(())
}
