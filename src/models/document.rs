//! The canonical document model: an ordered page sequence the external
//! renderer turns into a paginated artifact.

use crate::models::markdown::LayoutBlock;
use crate::models::record::RecordId;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Title printed on the cover page.
pub const DOC_TITLE: &str = "Internship Program Diary";
/// Caption of the trailing summary table.
pub const SUMMARY_TITLE: &str = "Holidays and Leaves";

/// Vertical placement knobs for the content-page frame, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPositions {
    pub header_top: f32,
    pub content_margin_top: f32,
    pub footer_bottom: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum LayoutStyle {
    #[default]
    Default,
    Compact,
}

impl LayoutStyle {
    pub fn positions(&self) -> LayoutPositions {
        match self {
            LayoutStyle::Default => LayoutPositions {
                header_top: 20.0,
                content_margin_top: 40.0,
                footer_bottom: 40.0,
            },
            LayoutStyle::Compact => LayoutPositions {
                header_top: 10.0,
                content_margin_top: 30.0,
                footer_bottom: 30.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStyle::Default => "default",
            LayoutStyle::Compact => "compact",
        }
    }
}

/// Cover fields, already resolved: missing values have been replaced by
/// blank rules and duration dates formatted as DD/MM/YYYY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverPage {
    pub title: String,
    pub name: String,
    pub id_no: String,
    pub ip_station: String,
    pub duration_from: String,
    pub duration_to: String,
    pub faculty_mentor: String,
    pub company_mentor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    pub record: RecordId,
    pub day: String,
    pub date: String,
    pub blocks: Vec<LayoutBlock>,
    pub positions: LayoutPositions,
}

/// One row of the summary table: the task text sits in the matching
/// column, the other column stays blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub date: String,
    pub holiday: String,
    pub leave: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPage {
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Cover(CoverPage),
    Content(ContentPage),
    Summary(SummaryPage),
}

impl Page {
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Cover(_) => "cover",
            Page::Content(_) => "content",
            Page::Summary(_) => "summary",
        }
    }
}

/// Ordered page sequence. Built fresh from the current record sequence
/// on every request; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub pages: Vec<Page>,
}

impl DocumentModel {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn content_pages(&self) -> impl Iterator<Item = &ContentPage> {
        self.pages.iter().filter_map(|p| match p {
            Page::Content(c) => Some(c),
            _ => None,
        })
    }

    pub fn summary(&self) -> Option<&SummaryPage> {
        self.pages.iter().find_map(|p| match p {
            Page::Summary(s) => Some(s),
            _ => None,
        })
    }
}
