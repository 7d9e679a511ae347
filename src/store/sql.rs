//! SQL fragment builders for the record store.
//!
//! Both builders are pure functions from an ordered [`Filter`] to a clause
//! string with numbered parameters (`?1`, `?2`, ...) and the positionally
//! aligned sequence of bound values. Identifier validation happens in the
//! store operations before either builder is reached.

use crate::models::{Filter, Value};

/// Builds a WHERE expression from a filter, with numbered parameters.
///
/// Each entry becomes a `column = ?N` term; terms are joined with ` AND `.
/// Term order matches the filter's insertion order, which matches the
/// returned value order.
///
/// An empty filter yields an empty clause and no values. Callers performing
/// filtered operations must reject empty filters before building SQL; the
/// store operations do.
///
/// # Examples
///
/// ```
/// use basecamp::Filter;
/// use basecamp::store::build_where_clause;
///
/// let filter = Filter::new().with("sukces", true).with("szczyty_id", 1);
/// let (clause, values) = build_where_clause(&filter);
/// assert_eq!(clause, "sukces = ?1 AND szczyty_id = ?2");
/// assert_eq!(values.len(), 2);
/// ```
#[must_use]
pub fn build_where_clause(filter: &Filter) -> (String, Vec<Value>) {
    let mut conditions = Vec::with_capacity(filter.len());
    let mut params = Vec::with_capacity(filter.len());

    for (idx, (column, value)) in filter.iter().enumerate() {
        conditions.push(format!("{column} = ?{}", idx + 1));
        params.push(value.clone());
    }

    (conditions.join(" AND "), params)
}

/// Builds a SET expression from an update mapping, with the target row id
/// appended as the final bound value.
///
/// Each entry becomes a `column = ?N` term; terms are joined with `, `.
/// The trailing placeholder `?N` (where `N == values.len()`) is reserved for
/// the caller's `WHERE id = ?N`, so the clause contains exactly
/// `values.len() - 1` placeholders.
///
/// # Examples
///
/// ```
/// use basecamp::{Filter, Value};
/// use basecamp::store::build_set_clause;
///
/// let updates = Filter::new().with("sukces", false);
/// let (clause, values) = build_set_clause(&updates, 1);
/// assert_eq!(clause, "sukces = ?1");
/// assert_eq!(values.last(), Some(&Value::Integer(1)));
/// ```
#[must_use]
pub fn build_set_clause(updates: &Filter, id: i64) -> (String, Vec<Value>) {
    let mut assignments = Vec::with_capacity(updates.len());
    let mut params = Vec::with_capacity(updates.len() + 1);

    for (idx, (column, value)) in updates.iter().enumerate() {
        assignments.push(format!("{column} = ?{}", idx + 1));
        params.push(value.clone());
    }
    params.push(Value::Integer(id));

    (assignments.join(", "), params)
}
