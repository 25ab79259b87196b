//! Host side of the timestamp filter: column definition, filter model,
//! session handle and the filter popup wiring the inputs to the session.

pub mod column;
pub mod filter;
pub mod popup;
pub mod session;

pub use column::ColumnDef;
pub use filter::{DateFilterParams, FilterModel, FilterOption};
pub use popup::FilterPopup;
pub use session::{GridEvent, GridSession, SortDirection};
