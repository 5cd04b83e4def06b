//! Session controller: single owner of the canonical record sequence.
//! All mutations go through here — wholesale replacement on ingest,
//! single-field replacement on edit — and every read recomputes the
//! derived views from scratch.

use crate::core::assemble::{AssembleInput, assemble_with};
use crate::core::classify::{Classification, classify};
use crate::errors::{AppError, AppResult};
use crate::models::document::{DocumentModel, LayoutPositions, LayoutStyle};
use crate::models::markdown::FontFamily;
use crate::models::record::{RecordId, TaskRecord};
use crate::models::user::UserDetails;

/// Token handed out by [`Session::begin_ingest`]; a commit is applied
/// only while its token is still the newest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestToken(u64);

#[derive(Debug, Default)]
pub struct Session {
    records: Vec<TaskRecord>,
    user: UserDetails,
    font: FontFamily,
    layout: LayoutStyle,
    generation: u64,
}

impl Session {
    pub fn new(records: Vec<TaskRecord>, user: UserDetails) -> Self {
        Self {
            records,
            user,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn user(&self) -> &UserDetails {
        &self.user
    }

    pub fn set_user(&mut self, user: UserDetails) {
        self.user = user;
    }

    pub fn set_font(&mut self, font: FontFamily) {
        self.font = font;
    }

    pub fn set_layout(&mut self, layout: LayoutStyle) {
        self.layout = layout;
    }

    pub fn positions(&self) -> LayoutPositions {
        self.layout.positions()
    }

    /// Start an ingestion. Every call supersedes all earlier tokens:
    /// whichever ingest began last wins, no matter which finishes first.
    pub fn begin_ingest(&mut self) -> IngestToken {
        self.generation += 1;
        IngestToken(self.generation)
    }

    /// Commit a finished ingestion. Returns false (and changes nothing)
    /// when a newer ingest has begun since the token was issued.
    pub fn commit_records(&mut self, token: IngestToken, records: Vec<TaskRecord>) -> bool {
        if token.0 != self.generation {
            log::debug!(
                "discarding stale ingest result (token {} < generation {})",
                token.0,
                self.generation
            );
            return false;
        }
        self.records = records;
        true
    }

    /// Replace the records unconditionally (file load, restore from the
    /// state store).
    pub fn replace_records(&mut self, records: Vec<TaskRecord>) {
        let token = self.begin_ingest();
        self.commit_records(token, records);
    }

    /// Fresh classification of the current sequence.
    pub fn classification(&self) -> Classification {
        classify(&self.records)
    }

    /// Replace the task text behind content page `content_index`
    /// (0-based among content pages). The index is mapped through a
    /// fresh classification to the record's stable original-sequence
    /// id; only that record's `task` changes.
    pub fn edit_task(&mut self, content_index: usize, text: String) -> AppResult<RecordId> {
        if self.records.is_empty() {
            return Err(AppError::NoRecords);
        }

        let cls = self.classification();
        let original_index = *cls
            .content
            .get(content_index)
            .ok_or(AppError::InvalidPage(content_index + 1))?;

        self.records[original_index].task = text;
        Ok(self.records[original_index].id)
    }

    /// Assemble a fresh document model from the current state.
    pub fn document(&self) -> DocumentModel {
        let cls = self.classification();
        assemble_with(
            &AssembleInput {
                records: &self.records,
                user: &self.user,
                positions: self.positions(),
                font: self.font,
            },
            &cls,
        )
    }
}
