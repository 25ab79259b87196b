//! Three-way comparison of a filter boundary against a stored row timestamp.
//!
//! The boundary comes from the input widget and is wall-clock time without a
//! zone marker. Row timestamps may be serialized with a trailing `Z`. The
//! marker is stripped before parsing so that both values are read in the same
//! configured timezone ([`TimezonePolicy`]). Both sides are then reduced to
//! epoch milliseconds.
//!
//! Unparseable input on either side is an [`AppError::InvalidTimestamp`]; the
//! comparator never yields an "unordered" result.

use crate::core::date_value::DateValue;
use crate::core::timezone::TimezonePolicy;
use crate::errors::AppResult;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampComparator {
    timezone: TimezonePolicy,
}

impl TimestampComparator {
    pub fn new(timezone: TimezonePolicy) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> TimezonePolicy {
        self.timezone
    }

    /// Epoch milliseconds of a filter boundary.
    pub fn boundary_millis(&self, boundary: &DateValue) -> AppResult<i64> {
        Ok(boundary.to_moment()?.epoch_millis(&self.timezone))
    }

    /// Epoch milliseconds of a stored cell value, UTC marker stripped.
    pub fn cell_millis(&self, cell: &DateValue) -> AppResult<i64> {
        Ok(cell.to_stripped_moment()?.epoch_millis(&self.timezone))
    }

    /// `Less` (-1) when the cell is earlier than the boundary, `Greater` (1)
    /// when later, `Equal` (0) on the same millisecond.
    pub fn compare(&self, boundary: &DateValue, cell: &DateValue) -> AppResult<Ordering> {
        let filter_by = self.boundary_millis(boundary)?;
        let filter_me = self.cell_millis(cell)?;
        Ok(filter_me.cmp(&filter_by))
    }
}

/// Numeric form of an ordering as the grid filter engine expects it.
pub fn ordering_sign(ord: Ordering) -> i8 {
    ord as i8
}
