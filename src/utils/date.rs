use crate::models::user::DATE_BLANK;
use chrono::NaiveDate;

/// Date formats accepted for the cover duration fields. ISO first
/// (what a date picker produces), then the common day-first and
/// US orderings.
const COVER_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    COVER_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Cover rendering of a duration date: DD/MM/YYYY, with the blank rule
/// for anything absent or unparseable. Never fails.
pub fn format_cover_date(value: Option<&str>) -> String {
    match value.and_then(parse_flexible) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => DATE_BLANK.to_string(),
    }
}
