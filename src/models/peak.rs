//! Peak record types.

use serde::{Deserialize, Serialize};

/// A named summit stored in the `szczyty` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peak {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Summit name (`nazwa` column).
    pub name: String,
    /// Absolute height in metres (`wysokosc_bezwzgledna` column).
    pub height: Option<i64>,
    /// Topographic prominence in metres (`wybitnosc` column).
    pub prominence: Option<i64>,
}

/// Insert payload for a peak. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPeak {
    /// Summit name.
    pub name: String,
    /// Absolute height in metres.
    pub height: Option<i64>,
    /// Topographic prominence in metres.
    pub prominence: Option<i64>,
}

impl NewPeak {
    /// Creates an insert payload with height and prominence set.
    #[must_use]
    pub fn new(name: impl Into<String>, height: i64, prominence: i64) -> Self {
        Self {
            name: name.into(),
            height: Some(height),
            prominence: Some(prominence),
        }
    }
}
