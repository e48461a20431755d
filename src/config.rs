//! Configuration handling for the TUI

use crate::state::{FormInput, Theme};
use crate::webhook::{DEFAULT_WEBHOOK_URL, WEBHOOK_URL_ENV};
use anyhow::Result;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client-side request timeout when none is configured
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("in", "synkrone", "synkrone-tui")
}

/// Directory for the log file and the saved draft
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Recommendation webhook address
    pub webhook_url: Option<String>,
    /// Client-side request timeout in milliseconds
    pub request_timeout_ms: Option<u64>,
    /// Theme preference
    pub theme: Option<Theme>,
    /// Enable animated loading placeholders
    pub animations: Option<bool>,
    /// Show informational notifications
    pub notifications: Option<bool>,
    /// Save form inputs and settings automatically
    pub autosave: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: TuiConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    /// Webhook address: environment override, then config, then default
    pub fn resolved_webhook_url(&self) -> String {
        Self::pick_webhook_url(std::env::var(WEBHOOK_URL_ENV).ok(), self.webhook_url.clone())
    }

    fn pick_webhook_url(env: Option<String>, configured: Option<String>) -> String {
        env.filter(|url| !url.trim().is_empty())
            .or(configured.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn animations(&self) -> bool {
        self.animations.unwrap_or(true)
    }

    pub fn notifications(&self) -> bool {
        self.notifications.unwrap_or(true)
    }

    pub fn autosave(&self) -> bool {
        self.autosave.unwrap_or(true)
    }
}

/// Form inputs saved between sessions when autosave is on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDraft {
    pub input: FormInput,
    pub saved_at: DateTime<Utc>,
}

impl FormDraft {
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            saved_at: Utc::now(),
        }
    }

    fn draft_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("draft.json"))
    }

    /// Load the saved draft, if one exists
    pub fn load() -> Result<Option<Self>> {
        match Self::draft_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::draft_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}
