//! Raw row adapter: an untyped header→cell mapping with named, optional
//! lookups. Nothing here assumes a field is present.

/// One cell of a raw row. Numeric cells keep their value so integer
/// spreadsheet cells do not grow a trailing `.0` when read as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Text form of the cell, None when empty or blank.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => {
                if s.trim().is_empty() {
                    None
                } else {
                    Some(s.clone())
                }
            }
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{n}"))
                }
            }
            Cell::Empty => None,
        }
    }
}

/// An untyped row as delivered by the spreadsheet/CSV layer. Owned only
/// transiently by the normalizer; never retained.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: Vec<(String, Cell)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: &str, cell: Cell) {
        self.cells.push((header.trim().to_string(), cell));
    }

    /// Named, case-insensitive lookup. The first matching column wins.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(h, _)| h.eq_ignore_ascii_case(name))
            .map(|(_, c)| c)
    }

    /// Text of the named column, if the column exists and is non-blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).and_then(Cell::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|(_, c)| c.as_text().is_none())
    }
}
