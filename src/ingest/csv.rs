use crate::errors::AppResult;
use crate::ingest::rows::{Cell, RawRow};
use std::io::Read;

/// Parse CSV bytes into raw rows. The first record is the header row;
/// short records are tolerated (missing trailing cells become absent
/// fields, per the row-level malformation policy).
pub fn parse_csv<R: Read>(reader: R) -> AppResult<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            let cell = match record.get(i) {
                Some(v) if !v.trim().is_empty() => Cell::Text(v.to_string()),
                _ => Cell::Empty,
            };
            row.push(header, cell);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}
