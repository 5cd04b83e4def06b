use serde::{Deserialize, Serialize};

/// Stable identity of a record within the original, unfiltered sequence.
/// Assigned once at normalization time; filtered views carry it along so
/// edits never have to value-match their way back to the source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub usize);

impl RecordId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One daily task entry after normalization, independent of source format.
///
/// `task` is always a string: a missing task cell normalizes to `""`,
/// never to a null. `day`/`date` are split out of a `"Monday, Jan 6"`
/// style cell when possible; a cell that does not match keeps its raw
/// text in `date` with `day` left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    pub day: Option<String>,
    pub date: Option<String>,
    pub task: String,
}

impl TaskRecord {
    pub fn new(id: usize, day: Option<String>, date: Option<String>, task: String) -> Self {
        Self {
            id: RecordId(id),
            day,
            date,
            task,
        }
    }

    /// Comparison key for classification: trimmed + lowercased.
    /// The stored value is never touched.
    pub fn task_key(&self) -> String {
        self.task.trim().to_lowercase()
    }

    /// Trimmed date, used for the excluded-dates set.
    pub fn trimmed_date(&self) -> Option<&str> {
        self.date.as_deref().map(str::trim)
    }
}
