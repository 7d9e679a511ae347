//! Data models for basecamp.
//!
//! This module contains the record types and the filter/value types used to
//! drive the generic store operations.

mod expedition;
mod filter;
mod peak;

pub use expedition::{Expedition, NewExpedition};
pub use filter::{Filter, Row, Value};
pub use peak::{NewPeak, Peak};
