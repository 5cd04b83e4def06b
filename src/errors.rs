//! Unified application error type.
//! All modules (ingest, core, cli, store) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingestion errors
    // ---------------------------
    #[error("Unsupported file format: {0} (expected csv, xls or xlsx)")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Invalid spreadsheet link: {0}")]
    InvalidLink(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Remote response is not CSV: {0}")]
    NonCsvResponse(String),

    // ---------------------------
    // Session / document errors
    // ---------------------------
    #[error("No content page {0}: the document has no such page")]
    InvalidPage(usize),

    #[error("No records loaded yet (run `load` or `fetch` first)")]
    NoRecords,

    // ---------------------------
    // Config / state errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
