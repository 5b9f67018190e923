//! Selection use cases.
//!
//! Toggling membership plus the derived values the UI shows next to the
//! generate trigger. Totals and counts are recomputed from current state on
//! every call; nothing here caches, so nothing here can go stale.

use std::sync::Arc;

use squadbldr_domain::{Character, CharacterId};

use crate::stores::{RosterStore, SelectionStore};

/// Selection operations and derived read models.
pub struct SelectionUseCases {
    roster: Arc<RosterStore>,
    selection: Arc<SelectionStore>,
}

impl SelectionUseCases {
    pub fn new(roster: Arc<RosterStore>, selection: Arc<SelectionStore>) -> Self {
        Self { roster, selection }
    }

    /// Toggle a character in or out of the selection. Returns whether the
    /// character is selected afterwards.
    pub async fn toggle(&self, id: CharacterId) -> bool {
        self.selection.toggle(id).await
    }

    pub async fn is_selected(&self, id: CharacterId) -> bool {
        self.selection.contains(id).await
    }

    pub async fn selected_count(&self) -> usize {
        self.selection.len().await
    }

    /// Selected characters in roster order, resolved against the
    /// authoritative store at call time.
    pub async fn selected_characters(&self) -> Vec<Character> {
        let ids = self.selection.ids().await;
        self.roster
            .list()
            .await
            .into_iter()
            .filter(|c| ids.contains(&c.id))
            .collect()
    }

    /// Combined value of the selected characters.
    pub async fn total_selected_value(&self) -> u64 {
        self.selected_characters()
            .await
            .iter()
            .map(|c| u64::from(c.value()))
            .sum()
    }

    /// Whether generation may be triggered for the given team count.
    pub async fn can_generate(&self, team_count: u32) -> bool {
        team_count >= 2 && self.selected_count().await >= team_count as usize
    }
}
