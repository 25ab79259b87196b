mod loader;

pub use loader::{DataFormat, load_rows};
