//! Table rendering for CLI outputs, display-width aware so records with
//! non-ASCII task text still line up.

use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            // Wrap every cell to its column width, then emit line by
            // line so long task text flows under its own column
            let wrapped: Vec<Vec<String>> = self
                .columns
                .iter()
                .zip(row.iter())
                .map(|(col, cell)| {
                    let lines = wrap(cell, col.width.max(1));
                    if lines.is_empty() {
                        vec![String::new()]
                    } else {
                        lines.into_iter().map(|l| l.into_owned()).collect()
                    }
                })
                .collect();

            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
            for line_no in 0..height {
                for (col, cell_lines) in self.columns.iter().zip(wrapped.iter()) {
                    let line = cell_lines.get(line_no).map(String::as_str).unwrap_or("");
                    out.push_str(&pad(line, col.width));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
