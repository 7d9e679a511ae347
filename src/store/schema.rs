//! Table identifiers and schema DDL.
//!
//! Table and column names are interpolated into SQL text, so they are
//! restricted to the allow-list carried by [`Table`]. Caller-supplied strings
//! never reach the statement builder as identifiers, only as bound values.

use std::fmt;

/// Tables known to the record store.
///
/// The table names (`szczyty`, `wyprawy`) are part of the on-disk contract:
/// existing database files produced by other tools use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// The `szczyty` table of [`Peak`](crate::Peak) records.
    Peaks,
    /// The `wyprawy` table of [`Expedition`](crate::Expedition) records.
    Expeditions,
}

impl Table {
    /// Returns the SQL table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Peaks => "szczyty",
            Self::Expeditions => "wyprawy",
        }
    }

    /// Returns the table's columns in schema order.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Peaks => &["id", "nazwa", "wysokosc_bezwzgledna", "wybitnosc"],
            Self::Expeditions => &["id", "szczyty_id", "data_wyprawy", "sukces", "droga"],
        }
    }

    /// Returns `true` if `column` belongs to this table.
    #[must_use]
    pub fn has_column(self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DDL for the `szczyty` table.
pub(crate) const CREATE_PEAKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS szczyty (
    id INTEGER PRIMARY KEY,
    nazwa TEXT NOT NULL,
    wysokosc_bezwzgledna INTEGER,
    wybitnosc INTEGER
)";

/// DDL for the `wyprawy` table.
pub(crate) const CREATE_EXPEDITIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS wyprawy (
    id INTEGER PRIMARY KEY,
    szczyty_id INTEGER NOT NULL,
    data_wyprawy TEXT NOT NULL,
    sukces BOOLEAN NOT NULL,
    droga VARCHAR(250) NOT NULL,
    FOREIGN KEY (szczyty_id) REFERENCES szczyty (id)
)";
