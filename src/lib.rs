//! # Basecamp
//!
//! An embedded `SQLite` record store for peaks and the expeditions that
//! attempt them.
//!
//! Basecamp keeps two related record kinds: a [`Peak`] (a named summit with
//! height and prominence) and an [`Expedition`] (an attempt on a peak, with
//! date, success flag, and route). Both are persisted through a single
//! [`RecordStore`] that exposes typed inserts, generic filtered reads, and
//! partial updates, all built on parameterized SQL fragments.
//!
//! ## Example
//!
//! ```rust,ignore
//! use basecamp::{Filter, NewPeak, RecordStore, Table};
//!
//! let store = RecordStore::in_memory()?;
//! store.init_schema()?;
//!
//! let id = store.insert_peak(&NewPeak::new("Gerlach", 2655, 2355))?;
//! let rows = store.select_where(Table::Peaks, &Filter::new().with("id", id))?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod models;
pub mod store;

// Re-exports for convenience
pub use models::{Expedition, Filter, NewExpedition, NewPeak, Peak, Row, Value};
pub use store::{RecordStore, Table};

/// Error type for record store operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty filter on a filtered operation, unknown column, attempt to update `id` |
/// | `OperationFailed` | Connection cannot be opened, statement execution fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A filtered operation is invoked with an empty filter mapping
    /// - A filter or update names a column the target table does not have
    /// - An update tries to rewrite the immutable `id` column
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The `SQLite` database cannot be opened
    /// - A statement fails to prepare or execute (constraint violation,
    ///   syntax error, locked database)
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for record store operations.
pub type Result<T> = std::result::Result<T, Error>;
