//! Record normalizer: one raw row in, exactly one canonical record out.
//! Total by design — malformed or missing cells degrade to None/empty,
//! a single bad row never aborts the batch.

use crate::ingest::rows::RawRow;
use crate::models::record::TaskRecord;
use regex::Regex;

/// Column the calendar date is looked up under.
pub const DATE_COLUMN: &str = "Date";
/// Column the task text is looked up under.
pub const TASK_COLUMN: &str = "Task";

/// Splits `"Monday, January 6, 2025"` into weekday and remainder.
fn weekday_pattern() -> Regex {
    Regex::new(r"^(\w+),\s+(.+)$").unwrap()
}

/// Normalize one raw row. `index` is the row's position in the original
/// sequence and becomes the record's stable id.
pub fn normalize_row(row: &RawRow, index: usize) -> TaskRecord {
    normalize_row_with(row, index, &weekday_pattern())
}

fn normalize_row_with(row: &RawRow, index: usize, pattern: &Regex) -> TaskRecord {
    let (day, date) = match row.text(DATE_COLUMN) {
        Some(raw) => match pattern.captures(&raw) {
            Some(caps) => (
                Some(caps[1].to_string()),
                Some(caps[2].to_string()),
            ),
            // No weekday prefix: keep the raw value verbatim
            None => (None, Some(raw)),
        },
        None => (None, None),
    };

    let task = row
        .text(TASK_COLUMN)
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    TaskRecord::new(index, day, date, task)
}

/// Normalize a full batch, assigning ids by original position.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<TaskRecord> {
    let pattern = weekday_pattern();
    rows.iter()
        .enumerate()
        .map(|(i, row)| normalize_row_with(row, i, &pattern))
        .collect()
}
