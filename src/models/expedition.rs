//! Expedition record types.

use serde::{Deserialize, Serialize};

/// An attempt on a peak, stored in the `wyprawy` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Identifier of the attempted peak (`szczyty_id` column).
    ///
    /// Referential integrity is enforced only if the backing store enforces
    /// foreign keys; the store does not validate peak existence itself.
    pub peak_id: i64,
    /// Expedition date as an ISO-like string (`data_wyprawy` column).
    ///
    /// No calendar validation is performed.
    pub date: String,
    /// Whether the summit was reached (`sukces` column).
    pub success: bool,
    /// Route description (`droga` column).
    pub route: String,
}

/// Insert payload for an expedition. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpedition {
    /// Identifier of the attempted peak.
    pub peak_id: i64,
    /// Expedition date as an ISO-like string.
    pub date: String,
    /// Whether the summit was reached.
    pub success: bool,
    /// Route description.
    pub route: String,
}

impl NewExpedition {
    /// Creates an insert payload.
    #[must_use]
    pub fn new(peak_id: i64, date: impl Into<String>, success: bool, route: impl Into<String>) -> Self {
        Self {
            peak_id,
            date: date.into(),
            success,
            route: route.into(),
        }
    }
}
