use crate::core::date_value::DateValue;
use serde::{Deserialize, Serialize};

/// One grid record. Rows are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: u64,
    /// Stored representation, possibly with a trailing UTC marker
    pub event_timestamp: DateValue,
}

impl Row {
    pub fn new(id: u64, event_timestamp: impl Into<DateValue>) -> Self {
        Self {
            id,
            event_timestamp: event_timestamp.into(),
        }
    }
}
