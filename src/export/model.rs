// src/export/model.rs

use crate::core::comparator::TimestampComparator;
use crate::models::row::Row;
use serde::Serialize;

/// Flat export record for one visible row.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RowExport {
    pub id: u64,
    /// Timestamp exactly as stored
    pub event_timestamp: String,
    /// Wall-clock reading in the configured timezone, empty when unparseable
    pub local_time: String,
    pub epoch_millis: Option<i64>,
}

impl RowExport {
    pub fn from_row(row: &Row, comparator: &TimestampComparator, display_format: &str) -> Self {
        let epoch_millis = comparator.cell_millis(&row.event_timestamp).ok();
        let local_time = epoch_millis
            .and_then(|ms| comparator.timezone().to_wall_clock(ms))
            .map(|dt| dt.format(display_format).to_string())
            .unwrap_or_default();

        Self {
            id: row.id,
            event_timestamp: row.event_timestamp.to_string(),
            local_time,
            epoch_millis,
        }
    }

    pub(crate) fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.event_timestamp.clone(),
            self.local_time.clone(),
        ]
    }
}

pub(crate) fn rows_to_export(
    rows: &[&Row],
    comparator: &TimestampComparator,
    display_format: &str,
) -> Vec<RowExport> {
    rows.iter()
        .map(|r| RowExport::from_row(r, comparator, display_format))
        .collect()
}
