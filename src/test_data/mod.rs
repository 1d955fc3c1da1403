// src/test_data/mod.rs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::debug;

use crate::error::DashboardError;
use crate::models::{Record, TestDataConfig};

pub const ENABLED_MARKER: &str = "Y";
pub const AUTO_DATE: &str = "AUTO_DATE";
pub const AUTO_TIMESTAMP: &str = "AUTO_TIMESTAMP";

#[derive(Debug, Clone)]
pub struct TestDataProvider {
    path: PathBuf,
}

impl TestDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The fixture record as of now, or `None` when the file does not enable it.
    pub async fn load(&self) -> Result<Option<Record>, DashboardError> {
        self.load_at(Local::now()).await
    }

    pub async fn load_at(&self, now: DateTime<Local>) -> Result<Option<Record>, DashboardError> {
        let config: TestDataConfig = serde_json::from_str(&self.read().await?)?;

        if config.enable_test_data.as_ref().and_then(Value::as_str) != Some(ENABLED_MARKER) {
            debug!(path = %self.path.display(), "test data disabled");
            return Ok(None);
        }

        let mut record = config.test_data;
        resolve_sentinels(&mut record, now);
        Ok(Some(record))
    }

    /// Set one top-level key and rewrite the whole document.
    pub async fn update(&self, key: &str, value: Value) -> Result<(), DashboardError> {
        let mut doc: serde_json::Map<String, Value> = serde_json::from_str(&self.read().await?)?;
        doc.insert(key.to_owned(), value);

        let body = serde_json::to_string_pretty(&doc)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| DashboardError::TestDataIo {
                path: self.path.clone(),
                source,
            })
    }

    async fn read(&self) -> Result<String, DashboardError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DashboardError::TestDataIo {
                path: self.path.clone(),
                source,
            })
    }
}

/// Replace the date sentinels with values derived from `now`.
pub fn resolve_sentinels(record: &mut Record, now: DateTime<Local>) {
    if let Some(day) = record.get_mut("DAY_DATE") {
        if day.as_str() == Some(AUTO_DATE) {
            *day = Value::String(now.format("%Y-%m-%d").to_string());
        }
    }
    if let Some(updated) = record.get_mut("UPDATE_DATE") {
        if updated.as_str() == Some(AUTO_TIMESTAMP) {
            *updated = Value::String(now.format("%Y-%m-%d %H:%M:%S").to_string());
        }
    }
}
