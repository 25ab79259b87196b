use crate::core::comparator::TimestampComparator;
use crate::core::date_value::DateValue;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Date filter options offered by the timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterOption {
    Equals,
    NotEqual,
    /// Cell strictly before the boundary
    #[value(name = "before")]
    LessThan,
    /// Cell strictly after the boundary
    #[value(name = "after")]
    GreaterThan,
    #[default]
    InRange,
}

impl FilterOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOption::Equals => "equals",
            FilterOption::NotEqual => "notEqual",
            FilterOption::LessThan => "lessThan",
            FilterOption::GreaterThan => "greaterThan",
            FilterOption::InRange => "inRange",
        }
    }

    pub fn needs_upper_bound(&self) -> bool {
        matches!(self, FilterOption::InRange)
    }
}

/// Filter configuration attached to the timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFilterParams {
    pub default_option: FilterOption,
    /// Whether `InRange` keeps rows equal to either bound
    pub inclusive: bool,
    pub comparator: TimestampComparator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterModel {
    pub option: FilterOption,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
}

impl FilterModel {
    pub fn new(option: FilterOption, date_from: NaiveDateTime) -> Self {
        Self {
            option,
            date_from: Some(date_from),
            date_to: None,
        }
    }

    pub fn in_range(date_from: NaiveDateTime, date_to: NaiveDateTime) -> Self {
        Self {
            option: FilterOption::InRange,
            date_from: Some(date_from),
            date_to: Some(date_to),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let from = self.date_from.ok_or_else(|| {
            AppError::InvalidFilter(format!("'{}' requires a start date", self.option.as_str()))
        })?;

        if self.option.needs_upper_bound() {
            let to = self.date_to.ok_or_else(|| {
                AppError::InvalidFilter("'inRange' requires an end date".to_string())
            })?;
            if to < from {
                return Err(AppError::InvalidFilter(format!(
                    "range end {to} is before range start {from}"
                )));
            }
        }

        Ok(())
    }

    /// Whether a cell value survives this filter.
    pub fn passes(&self, params: &DateFilterParams, cell: &DateValue) -> AppResult<bool> {
        self.validate()?;

        let cmp = |boundary: Option<NaiveDateTime>| -> AppResult<Ordering> {
            let boundary = boundary.map(DateValue::WallClock).ok_or_else(|| {
                AppError::InvalidFilter(format!("'{}' is missing a date", self.option.as_str()))
            })?;
            params.comparator.compare(&boundary, cell)
        };

        let keep = match self.option {
            FilterOption::Equals => cmp(self.date_from)? == Ordering::Equal,
            FilterOption::NotEqual => cmp(self.date_from)? != Ordering::Equal,
            FilterOption::LessThan => cmp(self.date_from)? == Ordering::Less,
            FilterOption::GreaterThan => cmp(self.date_from)? == Ordering::Greater,
            FilterOption::InRange => {
                let lower = cmp(self.date_from)?;
                let upper = cmp(self.date_to)?;
                if params.inclusive {
                    lower != Ordering::Less && upper != Ordering::Greater
                } else {
                    lower == Ordering::Greater && upper == Ordering::Less
                }
            }
        };

        Ok(keep)
    }
}
