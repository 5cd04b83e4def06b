use crate::errors::{AppError, AppResult};
use crate::ingest::rows::{Cell, RawRow};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Read the first worksheet of an XLS/XLSX workbook into raw rows.
/// The first row is taken as the header row.
pub fn parse_workbook(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Other(format!("{}: workbook has no sheets", path.display())))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut row_iter = range.rows();

    let headers: Vec<String> = match row_iter.next() {
        Some(cells) => cells.iter().map(|c| c.to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for cells in row_iter {
        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            let cell = match cells.get(i) {
                Some(Data::String(s)) => Cell::Text(s.clone()),
                Some(Data::Int(n)) => Cell::Number(*n as f64),
                Some(Data::Float(n)) => Cell::Number(*n),
                Some(Data::Bool(b)) => Cell::Text(b.to_string()),
                Some(Data::Empty) | Some(Data::Error(_)) | None => Cell::Empty,
                // Date/duration variants render through calamine's Display
                Some(other) => Cell::Text(other.to_string()),
            };
            row.push(header, cell);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}
