use crate::models::document::LayoutStyle;
use crate::models::markdown::FontFamily;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Application configuration, stored as YAML in the platform config dir.
/// A missing file is not an error: defaults apply on first run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// State store file holding link / user details / records.
    pub state_file: String,
    #[serde(default)]
    pub font: FontFamily,
    #[serde(default)]
    pub layout: LayoutStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: Self::state_file().to_string_lossy().to_string(),
            font: FontFamily::default(),
            layout: LayoutStyle::default(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("taskdiary")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".taskdiary")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("taskdiary.conf")
    }

    pub fn state_file() -> PathBuf {
        Self::config_dir().join("state.json")
    }

    /// Load configuration from file, or return defaults if not found
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    log::warn!("unparseable config file {}: {e}", path.display());
                    Config::default()
                }),
                Err(e) => {
                    log::warn!("unreadable config file {}: {e}", path.display());
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Write the configuration, creating the config dir when needed.
    pub fn save(&self) -> std::io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        fs::write(Self::config_file(), yaml)
    }

    /// Report fields that would fall back to defaults, for `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.state_file.trim().is_empty() {
            missing.push("state_file".to_string());
        }
        missing
    }
}
