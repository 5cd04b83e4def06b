use serde::{Deserialize, Serialize};

/// Blank rule printed on the cover for a missing text field.
pub const FIELD_BLANK: &str = "_________________";
/// Shorter blank rule for a missing or unparseable date.
pub const DATE_BLANK: &str = "_________";

/// Internship period as entered by the user (free text, ideally ISO dates).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Metadata printed on the cover page. Every field is optional: the
/// assembler substitutes blank rules, it never fails on absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: Option<String>,
    pub id_no: Option<String>,
    pub ip_station: Option<String>,
    #[serde(default)]
    pub duration: DurationRange,
    pub faculty_mentor: Option<String>,
    pub company_mentor: Option<String>,
}

impl UserDetails {
    /// Field text for the cover, falling back to the blank rule.
    pub fn field_or_blank(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => FIELD_BLANK.to_string(),
        }
    }

    /// Stem for the generated document filename: id number first,
    /// then name, then a fixed fallback.
    pub fn file_stem(&self) -> String {
        let raw = self
            .id_no
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.name.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or("task-diary");

        let stem: String = raw
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        if stem.is_empty() {
            "task-diary".to_string()
        } else {
            stem
        }
    }
}
