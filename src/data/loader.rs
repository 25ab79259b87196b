// src/data/loader.rs

use crate::errors::{AppError, AppResult};
use crate::models::row::Row;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Supported dataset layouts, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// `[{"id": 1, "eventTimestamp": "2021-03-01T10:00:00Z"}, ...]`
    Json,
    /// `id,eventTimestamp` header followed by one row per line
    Csv,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("csv") => Ok(DataFormat::Csv),
            _ => Err(AppError::Data(format!(
                "unsupported dataset extension: {}",
                path.display()
            ))),
        }
    }
}

/// Load every row of a dataset once. Ids must be unique.
pub fn load_rows(path: &Path) -> AppResult<Vec<Row>> {
    let format = DataFormat::from_path(path)?;
    let file = File::open(path)?;

    let rows: Vec<Row> = match format {
        DataFormat::Json => serde_json::from_reader(BufReader::new(file))?,
        DataFormat::Csv => {
            let mut rdr = csv::Reader::from_reader(BufReader::new(file));
            rdr.deserialize().collect::<Result<Vec<Row>, csv::Error>>()?
        }
    };

    let mut seen = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !seen.insert(row.id) {
            return Err(AppError::Data(format!("duplicate row id {}", row.id)));
        }
    }

    info!(rows = rows.len(), path = %path.display(), ?format, "dataset loaded");
    Ok(rows)
}
