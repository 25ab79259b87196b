use crate::core::comparator::TimestampComparator;
use crate::grid::filter::{DateFilterParams, FilterOption};

/// Column definition for the `eventTimestamp` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: &'static str,
    pub header_name: String,
    pub sortable: bool,
    pub filter_params: DateFilterParams,
}

impl ColumnDef {
    pub fn event_timestamp(comparator: TimestampComparator, inclusive: bool) -> Self {
        Self {
            field: "eventTimestamp",
            header_name: "Event Timestamp".to_string(),
            sortable: true,
            filter_params: DateFilterParams {
                default_option: FilterOption::InRange,
                inclusive,
                comparator,
            },
        }
    }
}
