// src/export/logic.rs

use crate::core::comparator::TimestampComparator;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_to_export;
use crate::grid::session::GridSession;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::info;

/// High-level export of the rows currently visible in a grid session.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered and sorted view.
    ///
    /// - `format`: csv | json
    /// - `file`: output path
    /// - `force`: overwrite without asking
    pub fn export(
        session: &GridSession,
        format: ExportFormat,
        file: &str,
        display_format: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let visible = session.displayed_rows()?;
        if visible.is_empty() {
            warning("No rows match the current filter.");
        }

        let comparator: TimestampComparator = session.column().filter_params.comparator;
        let rows = rows_to_export(&visible, &comparator, display_format);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        info!(format = format.as_str(), rows = rows.len(), path = %path.display(), "export written");

        Ok(rows.len())
    }
}
