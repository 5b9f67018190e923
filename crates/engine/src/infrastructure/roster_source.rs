//! JSON file roster source.
//!
//! Loads the initial character collection from a JSON array of
//! `{id?, name, faction, value}` records, once at startup.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::infrastructure::ports::{RosterRecord, RosterSource, RosterSourceError};

/// Roster source backed by a JSON file on disk.
pub struct JsonFileRosterSource {
    path: PathBuf,
}

impl JsonFileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for JsonFileRosterSource {
    async fn load(&self) -> Result<Vec<RosterRecord>, RosterSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| RosterSourceError::Unavailable(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| RosterSourceError::Malformed(e.to_string()))
    }
}
