//! Filter mappings and SQL scalar values.
//!
//! A [`Filter`] is an explicit ordered mapping of column name to expected
//! value. Keeping the entries ordered makes the clause builders deterministic:
//! the generated placeholder order always matches the bound value order.

use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;
use serde::{Deserialize, Serialize};

/// A typed SQL scalar bound to, or read back from, the backing store.
///
/// Booleans bind as integers `1`/`0`; `SQLite` has no boolean storage class,
/// so reads never produce the `Bool` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// A UTF-8 string.
    Text(String),
    /// A boolean, stored as integer `1`/`0`.
    Bool(bool),
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use rusqlite::types::Value as Sql;
        let owned = match self {
            Self::Null => Sql::Null,
            Self::Integer(i) => Sql::Integer(*i),
            Self::Real(r) => Sql::Real(*r),
            Self::Text(s) => Sql::Text(s.clone()),
            Self::Bool(b) => Sql::Integer(i64::from(*b)),
        };
        Ok(ToSqlOutput::Owned(owned))
    }
}

impl From<rusqlite::types::Value> for Value {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value as Sql;
        match value {
            Sql::Null => Self::Null,
            Sql::Integer(i) => Self::Integer(i),
            Sql::Real(r) => Self::Real(r),
            Sql::Text(s) => Self::Text(s),
            // Blob columns are not part of the schema contract.
            Sql::Blob(_) => Self::Null,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A row returned by the generic read operations, one [`Value`] per column
/// in schema order.
pub type Row = Vec<Value>;

/// Ordered column/value constraints used to build WHERE and SET clauses.
///
/// Entries keep insertion order, so clause term order always matches bound
/// value order. Filtered store operations require at least one entry; the
/// unfiltered paths ([`select_all`](crate::RecordStore::select_all),
/// [`delete_all`](crate::RecordStore::delete_all)) take no filter at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Vec<(String, Value)>);

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a column constraint, keeping insertion order.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((column.into(), value.into()));
        self
    }

    /// Returns `true` if the filter has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Filter {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_insertion_order() {
        let filter = Filter::new()
            .with("nazwa", "Gerlach")
            .with("wybitnosc", 2355)
            .with("sukces", true);

        let columns: Vec<&str> = filter.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, ["nazwa", "wybitnosc", "sukces"]);
        assert_eq!(filter.len(), 3);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_empty() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(42_i64), Value::Integer(42));
        assert_eq!(Value::from(7_i32), Value::Integer(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("droga"), Value::Text("droga".to_string()));
        assert_eq!(Value::from(2.5_f64), Value::Real(2.5));
    }

    #[test]
    fn test_value_from_sql_value() {
        use rusqlite::types::Value as Sql;

        assert_eq!(Value::from(Sql::Null), Value::Null);
        assert_eq!(Value::from(Sql::Integer(7)), Value::Integer(7));
        assert_eq!(
            Value::from(Sql::Text("tatry".to_string())),
            Value::Text("tatry".to_string())
        );
        assert_eq!(Value::from(Sql::Blob(vec![1, 2, 3])), Value::Null);
    }

    #[test]
    fn test_bool_binds_as_integer() {
        let bound = Value::Bool(true).to_sql().unwrap();
        assert_eq!(
            bound,
            ToSqlOutput::Owned(rusqlite::types::Value::Integer(1))
        );

        let bound = Value::Bool(false).to_sql().unwrap();
        assert_eq!(
            bound,
            ToSqlOutput::Owned(rusqlite::types::Value::Integer(0))
        );
    }
}
