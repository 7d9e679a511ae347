//! Shared connection handling for the `SQLite` backing store.

use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};

/// Helper to acquire the connection mutex with poison recovery.
///
/// If the mutex is poisoned (due to a panic in a previous critical section),
/// we recover the inner value and log a warning. The connection state is
/// still valid; `SQLite` rolls back any statement interrupted by the panic.
pub(crate) fn acquire_lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("record store mutex was poisoned, recovering");
            metrics::counter!("record_store_mutex_poison_recovery_total").increment(1);
            poisoned.into_inner()
        },
    }
}

/// Configures a `SQLite` connection for the record store.
///
/// - **WAL mode**: concurrent readers with a single writer
/// - **NORMAL synchronous**: balances durability with performance
/// - **`busy_timeout`**: waits up to 5 seconds for locks instead of failing
///   immediately with `SQLITE_BUSY`
///
/// The foreign-key pragma is left at `SQLite`'s default (off): referential
/// integrity between expeditions and peaks is enforced only if the caller
/// opts the database into it.
pub(crate) fn configure_connection(conn: &Connection) {
    // journal_mode returns a string like "wal"; the result value is not useful
    let _ = conn.pragma_update(None, "journal_mode", "WAL");
    let _ = conn.pragma_update(None, "synchronous", "NORMAL");
    let _ = conn.pragma_update(None, "busy_timeout", "5000");
}
