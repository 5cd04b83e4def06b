//! External key-value state store: the last-used remote link, the last
//! user details and the last processed record sequence, as one JSON
//! file. The core pipeline holds no ambient state — callers load from
//! here at startup and write back after every mutation. Every field is
//! optional so a first run (no file at all) works from an empty state.

use crate::errors::{AppError, AppResult};
use crate::models::record::TaskRecord;
use crate::models::user::UserDetails;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub last_link: Option<String>,
    pub user: Option<UserDetails>,
    pub records: Option<Vec<TaskRecord>>,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state; an absent file yields the empty state.
    pub fn load(&self) -> AppResult<AppState> {
        if !self.path.exists() {
            return Ok(AppState::default());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Store(format!("{}: {e}", self.path.display())))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, state: &AppState) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::Store(format!("{}: {e}", dir.display())))?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Store(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}
