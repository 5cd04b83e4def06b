// src/ingest/mod.rs

mod csv;
pub mod link;
pub mod rows;
mod xlsx;

pub use csv::parse_csv;
pub use link::{fetch_csv_text, validate_link};

use crate::core::normalize::normalize_rows;
use crate::errors::{AppError, AppResult};
use crate::models::record::TaskRecord;
use std::fs::File;
use std::path::Path;

/// Supported input formats, decided by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xls,
    Xlsx,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xls" => Ok(InputFormat::Xls),
            "xlsx" => Ok(InputFormat::Xlsx),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Xls => "xls",
            InputFormat::Xlsx => "xlsx",
        }
    }
}

/// Ingest a spreadsheet file into canonical records. Errors here abort
/// the ingestion with nothing committed; row-level problems never error
/// (they degrade inside the normalizer).
pub fn load_records(path: &Path) -> AppResult<Vec<TaskRecord>> {
    let format = InputFormat::from_path(path)?;
    log::debug!("ingesting {} as {}", path.display(), format.as_str());

    let rows = match format {
        InputFormat::Csv => parse_csv(File::open(path)?)?,
        InputFormat::Xls | InputFormat::Xlsx => xlsx::parse_workbook(path)?,
    };

    Ok(normalize_rows(&rows))
}

/// Ingest CSV text fetched from a remote link.
pub fn records_from_csv_text(text: &str) -> AppResult<Vec<TaskRecord>> {
    let rows = parse_csv(text.as_bytes())?;
    Ok(normalize_rows(&rows))
}
