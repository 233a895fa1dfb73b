use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SKILLS_KEY_PREFIX: &str = "skills-";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

impl Resume {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: created_at.into(),
        }
    }

    /// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` and plain dates.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(ts.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn created_display(&self) -> String {
        match self.created_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => "Invalid Date".to_string(),
        }
    }
}

pub fn skills_key(resume_id: &str) -> String {
    format!("{}{}", SKILLS_KEY_PREFIX, resume_id)
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const MIN_WIDTH: u32 = 480;
    pub const MIN_HEIGHT: u32 = 360;

    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 760,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub resumes_path: Option<PathBuf>,
    pub local_store_path: Option<PathBuf>,
    pub toast_duration_ms: u64,
    pub window: WindowSize,
}

impl AppConfig {
    pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resumes_path: None,
            local_store_path: None,
            toast_duration_ms: Self::DEFAULT_TOAST_DURATION_MS,
            window: WindowSize::default(),
        }
    }
}
