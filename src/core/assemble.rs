//! Document assembler: combines classified records, compiled markdown
//! and user metadata into the ordered page sequence.

use crate::core::classify::{Classification, classify};
use crate::core::compile::compile_markdown;
use crate::models::document::{
    ContentPage, CoverPage, DOC_TITLE, DocumentModel, LayoutPositions, Page, SUMMARY_TITLE,
    SummaryPage, SummaryRow,
};
use crate::models::markdown::FontFamily;
use crate::models::record::TaskRecord;
use crate::models::user::UserDetails;
use crate::utils::date::format_cover_date;

/// Everything the assembler needs for one build.
pub struct AssembleInput<'a> {
    pub records: &'a [TaskRecord],
    pub user: &'a UserDetails,
    pub positions: LayoutPositions,
    pub font: FontFamily,
}

fn cover_page(user: &UserDetails) -> CoverPage {
    CoverPage {
        title: DOC_TITLE.to_string(),
        name: UserDetails::field_or_blank(user.name.as_deref()),
        id_no: UserDetails::field_or_blank(user.id_no.as_deref()),
        ip_station: UserDetails::field_or_blank(user.ip_station.as_deref()),
        duration_from: format_cover_date(user.duration.from.as_deref()),
        duration_to: format_cover_date(user.duration.to.as_deref()),
        faculty_mentor: UserDetails::field_or_blank(user.faculty_mentor.as_deref()),
        company_mentor: UserDetails::field_or_blank(user.company_mentor.as_deref()),
    }
}

/// Summary rows over the *entire* original sequence, in original order:
/// one row per holiday or leave record, task text in the matching column.
fn summary_rows(records: &[TaskRecord], cls: &Classification) -> Vec<SummaryRow> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let is_holiday = cls.is_holiday_index(i);
            let is_leave = cls.is_leave_index(i);
            if !is_holiday && !is_leave {
                return None;
            }
            Some(SummaryRow {
                date: record.date.clone().unwrap_or_default(),
                holiday: if is_holiday {
                    record.task.clone()
                } else {
                    String::new()
                },
                leave: if is_leave {
                    record.task.clone()
                } else {
                    String::new()
                },
            })
        })
        .collect()
}

/// Build the document model: one cover page, one content page per
/// content record in original order, and a trailing summary page iff
/// any holiday or leave record exists. Stateless with respect to prior
/// builds; safe to call repeatedly.
pub fn assemble(input: &AssembleInput<'_>) -> DocumentModel {
    let cls = classify(input.records);
    assemble_with(input, &cls)
}

/// Variant for callers that already hold a fresh classification.
pub fn assemble_with(input: &AssembleInput<'_>, cls: &Classification) -> DocumentModel {
    let mut pages = Vec::with_capacity(input.records.len() + 2);

    pages.push(Page::Cover(cover_page(input.user)));

    for record in cls.content_records(input.records) {
        pages.push(Page::Content(ContentPage {
            record: record.id,
            day: record.day.clone().unwrap_or_default(),
            date: record.date.clone().unwrap_or_default(),
            blocks: compile_markdown(&record.task, input.font),
            positions: input.positions,
        }));
    }

    if !cls.summary_is_empty() {
        pages.push(Page::Summary(SummaryPage {
            title: SUMMARY_TITLE.to_string(),
            rows: summary_rows(input.records, cls),
        }));
    }

    DocumentModel { pages }
}

/// Filename the renderer should use for the exported artifact, derived
/// from the user's identifier field.
pub fn suggested_file_name(user: &UserDetails, extension: &str) -> String {
    format!("{}_diary.{extension}", user.file_stem())
}
