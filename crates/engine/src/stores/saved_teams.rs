//! Saved team set storage.
//!
//! Named, immutable snapshots of past generation results, most-recent-first.
//! Lifecycle is independent of the roster and the selection set.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use squadbldr_domain::{DomainError, SavedTeamSet, SavedTeamSetId, Team};

/// In-memory store for persisted team partitions.
#[derive(Default)]
pub struct SavedTeamSetStore {
    sets: RwLock<Vec<SavedTeamSet>>,
}

impl SavedTeamSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a generation result under a fresh id, prepending it to the
    /// collection. An empty result cannot be saved (store invariant); the
    /// non-empty-name check is a caller precondition, enforced upstream.
    pub async fn save(
        &self,
        name: impl Into<String>,
        teams: Vec<Team>,
        created_at: DateTime<Utc>,
    ) -> Result<SavedTeamSet, DomainError> {
        if teams.is_empty() {
            return Err(DomainError::constraint(
                "cannot save an empty generation result",
            ));
        }

        let set = SavedTeamSet::new(name, teams, created_at);
        self.sets.write().await.insert(0, set.clone());
        Ok(set)
    }

    /// Remove the matching entry; no-op if absent.
    pub async fn delete(&self, id: SavedTeamSetId) {
        self.sets.write().await.retain(|s| s.id != id);
    }

    pub async fn get(&self, id: SavedTeamSetId) -> Option<SavedTeamSet> {
        self.sets.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Snapshot of all saved sets, most-recent-first.
    pub async fn list(&self) -> Vec<SavedTeamSet> {
        self.sets.read().await.clone()
    }
}
