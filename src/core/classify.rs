//! Category classifier: partitions the record sequence into content,
//! holiday and leave views. A derived, non-owning view — recomputed from
//! scratch whenever the sequence changes, never patched.

use crate::models::record::TaskRecord;
use std::collections::HashSet;

/// Task labels that mark a leave record (compared against the
/// trimmed + lowercased task text).
pub const LEAVE_LABELS: [&str; 2] = ["on leave", "leave day"];
/// Task label that marks a holiday record.
pub const HOLIDAY_LABEL: &str = "holiday";
/// Holiday cells longer than this are treated as ordinary task text.
pub const HOLIDAY_MAX_LEN: usize = 30;

/// Derived partition of a record sequence. Holds original-sequence
/// indices, so every view can be mapped back to its source record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub content: Vec<usize>,
    pub holiday: Vec<usize>,
    pub leave: Vec<usize>,
    /// Trimmed dates of every holiday and leave record.
    pub excluded_dates: HashSet<String>,
}

fn is_leave_key(key: &str) -> bool {
    LEAVE_LABELS.contains(&key)
}

fn is_holiday(record: &TaskRecord, key: &str) -> bool {
    key == HOLIDAY_LABEL
        && record.task.chars().count() <= HOLIDAY_MAX_LEN
        // Guard against a future overlap between the label sets
        && !is_leave_key(key)
}

/// Classify the full record sequence.
///
/// Content excludes holiday- and leave-labeled records, and also every
/// record whose trimmed date matches a holiday or leave date — even when
/// its own task text is a real task. That date-based suppression is
/// intended policy: a date that carries a holiday or leave entry yields
/// no content page at all.
pub fn classify(records: &[TaskRecord]) -> Classification {
    let mut cls = Classification::default();

    for (i, record) in records.iter().enumerate() {
        let key = record.task_key();
        if is_leave_key(&key) {
            cls.leave.push(i);
        } else if is_holiday(record, &key) {
            cls.holiday.push(i);
        }
    }

    for &i in cls.holiday.iter().chain(cls.leave.iter()) {
        if let Some(date) = records[i].trimmed_date() {
            cls.excluded_dates.insert(date.to_string());
        }
    }

    for (i, record) in records.iter().enumerate() {
        // Content exclusion keys off the labels alone: a "holiday" cell
        // rejected by the length guard still yields no content page.
        let key = record.task_key();
        if key == HOLIDAY_LABEL || is_leave_key(&key) {
            continue;
        }
        let date_excluded = record
            .trimmed_date()
            .is_some_and(|d| cls.excluded_dates.contains(d));
        if !date_excluded {
            cls.content.push(i);
        }
    }

    cls
}

impl Classification {
    /// Content records in original order.
    pub fn content_records<'a>(
        &'a self,
        records: &'a [TaskRecord],
    ) -> impl Iterator<Item = &'a TaskRecord> {
        self.content.iter().map(move |&i| &records[i])
    }

    /// True when there is nothing for a summary page to show.
    pub fn summary_is_empty(&self) -> bool {
        self.holiday.is_empty() && self.leave.is_empty()
    }

    pub fn is_holiday_index(&self, index: usize) -> bool {
        self.holiday.contains(&index)
    }

    pub fn is_leave_index(&self, index: usize) -> bool {
        self.leave.contains(&index)
    }
}
