pub mod adapter;
pub mod comparator;
pub mod date_value;
pub mod timezone;
pub mod widget;

pub use adapter::{DateTimeInputAdapter, Selection};
pub use comparator::TimestampComparator;
pub use date_value::DateValue;
pub use timezone::TimezonePolicy;
