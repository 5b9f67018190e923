//! Selection set storage.
//!
//! A mutable set of roster ids chosen for team generation, independent of
//! any filtering or sorting applied for display. Session-scoped, never
//! persisted.

use std::collections::HashSet;

use tokio::sync::RwLock;

use squadbldr_domain::CharacterId;

/// In-memory store for the currently selected character ids.
#[derive(Default)]
pub struct SelectionStore {
    ids: RwLock<HashSet<CharacterId>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id: remove if present, add otherwise. Returns whether the
    /// id is selected after the call. No roster-existence check is made
    /// here; callers only pass ids they obtained from the roster.
    pub async fn toggle(&self, id: CharacterId) -> bool {
        let mut guard = self.ids.write().await;
        if guard.remove(&id) {
            false
        } else {
            guard.insert(id);
            true
        }
    }

    /// Idempotent removal, invoked by the roster delete path so the
    /// selection never holds dangling ids.
    pub async fn remove(&self, id: CharacterId) {
        self.ids.write().await.remove(&id);
    }

    pub async fn contains(&self, id: CharacterId) -> bool {
        self.ids.read().await.contains(&id)
    }

    pub async fn ids(&self) -> HashSet<CharacterId> {
        self.ids.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.ids.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ids.read().await.is_empty()
    }
}
