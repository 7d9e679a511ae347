//! `SQLite`-backed record store.
//!
//! The store owns a single [`rusqlite::Connection`] behind a `Mutex` and
//! exposes typed inserts for the two record kinds plus generic filtered
//! reads, partial updates, and deletes over any known [`Table`].
//!
//! ## Concurrency Model
//!
//! Every operation is synchronous and blocks the caller until `SQLite`
//! responds. The `Mutex` serializes statements; WAL mode and the
//! `busy_timeout` pragma keep contention graceful when several stores point
//! at the same file. See [`connection`] for the pragma set.
//!
//! ## Identifier Safety
//!
//! Table and column names are interpolated into SQL text, so both are
//! validated against the [`Table`] allow-list before any statement is built.
//! Values are always bound through numbered parameters.

mod connection;
mod metrics;
mod schema;
mod sql;

pub use schema::Table;
pub use sql::{build_set_clause, build_where_clause};

use crate::models::{Expedition, Filter, NewExpedition, NewPeak, Peak, Row, Value};
use crate::{Error, Result};
use connection::{acquire_lock, configure_connection};
use metrics::record_operation_metrics;
use rusqlite::{Connection, params, params_from_iter};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::instrument;

/// `SQLite`-backed store for peak and expedition records.
///
/// Open a store with [`RecordStore::new`] or [`RecordStore::in_memory`],
/// then run [`RecordStore::init_schema`] once before the first operation on
/// a fresh database. Schema creation is explicit rather than implicit in
/// `new` so that a store can also be pointed at an existing database file
/// without touching its DDL.
pub struct RecordStore {
    /// Connection to the `SQLite` database.
    ///
    /// Protected by Mutex because `rusqlite::Connection` is not `Sync`.
    conn: Mutex<Connection>,
    /// Path to the `SQLite` database (None for in-memory).
    db_path: Option<PathBuf>,
}

impl RecordStore {
    /// Opens a store backed by the database file at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        let conn = Connection::open(&db_path).map_err(|e| Error::OperationFailed {
            operation: "open_store".to_string(),
            cause: e.to_string(),
        })?;
        configure_connection(&conn);

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: Some(db_path),
        })
    }

    /// Opens an in-memory store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::OperationFailed {
            operation: "open_store_in_memory".to_string(),
            cause: e.to_string(),
        })?;
        configure_connection(&conn);

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: None,
        })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub const fn db_path(&self) -> Option<&PathBuf> {
        self.db_path.as_ref()
    }

    /// Creates the `szczyty` and `wyprawy` tables if they do not exist.
    ///
    /// Idempotent; safe to call on an already-initialized database.
    ///
    /// # Errors
    ///
    /// Returns an error if either DDL statement fails.
    pub fn init_schema(&self) -> Result<()> {
        let conn = acquire_lock(&self.conn);

        conn.execute(schema::CREATE_PEAKS_TABLE, [])
            .map_err(|e| Error::OperationFailed {
                operation: "create_peaks_table".to_string(),
                cause: e.to_string(),
            })?;
        conn.execute(schema::CREATE_EXPEDITIONS_TABLE, [])
            .map_err(|e| Error::OperationFailed {
                operation: "create_expeditions_table".to_string(),
                cause: e.to_string(),
            })?;

        Ok(())
    }

    /// Inserts a peak and returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert violates a constraint or otherwise
    /// fails to execute.
    #[instrument(skip(self, peak), fields(operation = "insert_peak"))]
    pub fn insert_peak(&self, peak: &NewPeak) -> Result<i64> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);

            conn.execute(
                "INSERT INTO szczyty (nazwa, wysokosc_bezwzgledna, wybitnosc)
                 VALUES (?1, ?2, ?3)",
                params![peak.name, peak.height, peak.prominence],
            )
            .map_err(|e| Error::OperationFailed {
                operation: "insert_peak".to_string(),
                cause: e.to_string(),
            })?;

            Ok(conn.last_insert_rowid())
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("insert_peak", start, status);
        result
    }

    /// Inserts an expedition and returns the store-assigned id.
    ///
    /// The referenced peak id is not validated here; a dangling reference
    /// fails only if the database enforces foreign keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert violates a constraint or otherwise
    /// fails to execute.
    #[instrument(skip(self, expedition), fields(operation = "insert_expedition"))]
    pub fn insert_expedition(&self, expedition: &NewExpedition) -> Result<i64> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);

            conn.execute(
                "INSERT INTO wyprawy (szczyty_id, data_wyprawy, sukces, droga)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    expedition.peak_id,
                    expedition.date,
                    expedition.success,
                    expedition.route
                ],
            )
            .map_err(|e| Error::OperationFailed {
                operation: "insert_expedition".to_string(),
                cause: e.to_string(),
            })?;

            Ok(conn.last_insert_rowid())
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("insert_expedition", start, status);
        result
    }

    /// Returns every row of `table` in store-natural order.
    ///
    /// No ORDER BY is applied, so ordering across calls is store-defined,
    /// not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails to execute.
    #[instrument(skip(self), fields(operation = "select_all"))]
    pub fn select_all(&self, table: Table) -> Result<Vec<Row>> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);
            let sql = format!("SELECT * FROM {table}");

            Self::query_rows(&conn, &sql, &[], "select_all")
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("select_all", start, status);
        result
    }

    /// Returns the rows of `table` matching every filter entry.
    ///
    /// Zero matches yields an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the filter is empty or names an
    /// unknown column, or [`Error::OperationFailed`] if the query fails.
    #[instrument(skip(self), fields(operation = "select_where"))]
    pub fn select_where(&self, table: Table, filter: &Filter) -> Result<Vec<Row>> {
        let start = Instant::now();
        let result = (|| {
            Self::validate_filter(table, filter, "select_where")?;
            let (clause, values) = build_where_clause(filter);
            let sql = format!("SELECT * FROM {table} WHERE {clause}");

            let conn = acquire_lock(&self.conn);
            Self::query_rows(&conn, &sql, &values, "select_where")
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("select_where", start, status);
        result
    }

    /// Applies a partial field update to the row of `table` with the given
    /// id and returns the affected-row count (0 if no such row).
    ///
    /// The `id` column itself is immutable and cannot appear in `updates`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `updates` is empty, names an
    /// unknown column, or targets `id`; returns [`Error::OperationFailed`]
    /// if the statement fails. Statement failures are also logged.
    #[instrument(skip(self), fields(operation = "update"))]
    pub fn update(&self, table: Table, id: i64, updates: &Filter) -> Result<usize> {
        let start = Instant::now();
        let result = (|| {
            Self::validate_filter(table, updates, "update")?;
            if updates.iter().any(|(column, _)| column == "id") {
                return Err(Error::InvalidInput(
                    "the id column is immutable and cannot be updated".to_string(),
                ));
            }

            let (clause, values) = build_set_clause(updates, id);
            let sql = format!("UPDATE {table} SET {clause} WHERE id = ?{}", values.len());

            let conn = acquire_lock(&self.conn);
            let affected = conn
                .execute(&sql, params_from_iter(values.iter()))
                .map_err(|e| {
                    tracing::warn!(%table, id, error = %e, "update statement failed");
                    Error::OperationFailed {
                        operation: "update".to_string(),
                        cause: e.to_string(),
                    }
                })?;

            Ok(affected)
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("update", start, status);
        result
    }

    /// Deletes the rows of `table` matching every filter entry and returns
    /// the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the filter is empty or names an
    /// unknown column, or [`Error::OperationFailed`] if the statement fails.
    #[instrument(skip(self), fields(operation = "delete_where"))]
    pub fn delete_where(&self, table: Table, filter: &Filter) -> Result<usize> {
        let start = Instant::now();
        let result = (|| {
            Self::validate_filter(table, filter, "delete_where")?;
            let (clause, values) = build_where_clause(filter);
            let sql = format!("DELETE FROM {table} WHERE {clause}");

            let conn = acquire_lock(&self.conn);
            conn.execute(&sql, params_from_iter(values.iter()))
                .map_err(|e| Error::OperationFailed {
                    operation: "delete_where".to_string(),
                    cause: e.to_string(),
                })
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("delete_where", start, status);
        result
    }

    /// Deletes every row of `table` and returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to execute.
    #[instrument(skip(self), fields(operation = "delete_all"))]
    pub fn delete_all(&self, table: Table) -> Result<usize> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);
            let sql = format!("DELETE FROM {table}");

            conn.execute(&sql, [])
                .map_err(|e| Error::OperationFailed {
                    operation: "delete_all".to_string(),
                    cause: e.to_string(),
                })
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("delete_all", start, status);
        result
    }

    /// Returns every peak as a typed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails to execute.
    #[instrument(skip(self), fields(operation = "peaks"))]
    pub fn peaks(&self) -> Result<Vec<Peak>> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);

            let mut stmt = conn
                .prepare("SELECT id, nazwa, wysokosc_bezwzgledna, wybitnosc FROM szczyty")
                .map_err(|e| Error::OperationFailed {
                    operation: "prepare_peaks".to_string(),
                    cause: e.to_string(),
                })?;

            let peaks = stmt
                .query_map([], |row| {
                    Ok(Peak {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        height: row.get(2)?,
                        prominence: row.get(3)?,
                    })
                })
                .map_err(|e| Error::OperationFailed {
                    operation: "peaks".to_string(),
                    cause: e.to_string(),
                })?
                .collect::<rusqlite::Result<Vec<Peak>>>()
                .map_err(|e| Error::OperationFailed {
                    operation: "peaks_row".to_string(),
                    cause: e.to_string(),
                })?;

            Ok(peaks)
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("peaks", start, status);
        result
    }

    /// Returns every expedition as a typed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails to execute.
    #[instrument(skip(self), fields(operation = "expeditions"))]
    pub fn expeditions(&self) -> Result<Vec<Expedition>> {
        let start = Instant::now();
        let result = (|| {
            let conn = acquire_lock(&self.conn);

            let mut stmt = conn
                .prepare("SELECT id, szczyty_id, data_wyprawy, sukces, droga FROM wyprawy")
                .map_err(|e| Error::OperationFailed {
                    operation: "prepare_expeditions".to_string(),
                    cause: e.to_string(),
                })?;

            let expeditions = stmt
                .query_map([], |row| {
                    Ok(Expedition {
                        id: row.get(0)?,
                        peak_id: row.get(1)?,
                        date: row.get(2)?,
                        success: row.get(3)?,
                        route: row.get(4)?,
                    })
                })
                .map_err(|e| Error::OperationFailed {
                    operation: "expeditions".to_string(),
                    cause: e.to_string(),
                })?
                .collect::<rusqlite::Result<Vec<Expedition>>>()
                .map_err(|e| Error::OperationFailed {
                    operation: "expeditions_row".to_string(),
                    cause: e.to_string(),
                })?;

            Ok(expeditions)
        })();

        let status = if result.is_ok() { "success" } else { "error" };
        record_operation_metrics("expeditions", start, status);
        result
    }

    /// Runs a SELECT and collects every row as a generic [`Row`].
    fn query_rows(
        conn: &Connection,
        sql: &str,
        values: &[Value],
        operation: &str,
    ) -> Result<Vec<Row>> {
        let mut stmt = conn.prepare(sql).map_err(|e| Error::OperationFailed {
            operation: format!("prepare_{operation}"),
            cause: e.to_string(),
        })?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                let mut out = Row::with_capacity(column_count);
                for idx in 0..column_count {
                    out.push(Value::from(row.get::<_, rusqlite::types::Value>(idx)?));
                }
                Ok(out)
            })
            .map_err(|e| Error::OperationFailed {
                operation: operation.to_string(),
                cause: e.to_string(),
            })?
            .collect::<rusqlite::Result<Vec<Row>>>()
            .map_err(|e| Error::OperationFailed {
                operation: format!("{operation}_row"),
                cause: e.to_string(),
            })?;

        Ok(rows)
    }

    /// Rejects empty filters and columns outside the table's allow-list.
    fn validate_filter(table: Table, filter: &Filter, operation: &str) -> Result<()> {
        if filter.is_empty() {
            return Err(Error::InvalidInput(format!(
                "{operation} requires at least one filter entry"
            )));
        }
        for (column, _) in filter {
            if !table.has_column(column) {
                return Err(Error::InvalidInput(format!(
                    "unknown column '{column}' in table '{table}'"
                )));
            }
        }
        Ok(())
    }
}
