//! View projection - filtered, sorted, read-only roster sequences.
//!
//! Pure derivation over the roster store and the enabled-factions set.
//! Nothing here mutates the roster or the selection.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use squadbldr_domain::Character;

use crate::stores::RosterStore;

/// Total orderings available for the roster display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Roster insertion order (newest first).
    #[default]
    InsertionOrder,
    ValueDesc,
    ValueAsc,
    /// Case-aware lexical name ordering.
    NameAsc,
}

/// The set of factions currently enabled for display.
///
/// Defaults to every faction present in the roster. When the distinct
/// faction set changes (e.g., an add introduces a new faction), the enabled
/// set resets to all present factions, so new factions start enabled.
#[derive(Debug, Clone, Default)]
pub struct FactionFilter {
    enabled: HashSet<String>,
    known: Vec<String>,
}

impl FactionFilter {
    /// Start with every given faction enabled. `factions` must be the
    /// sorted distinct faction list from the roster.
    pub fn new(factions: &[String]) -> Self {
        Self {
            enabled: factions.iter().cloned().collect(),
            known: factions.to_vec(),
        }
    }

    /// Reconcile with the roster's current distinct faction set. A changed
    /// set resets the filter to all-enabled; an unchanged set keeps the
    /// user's toggles.
    pub fn sync(&mut self, factions: &[String]) {
        if self.known != factions {
            self.enabled = factions.iter().cloned().collect();
            self.known = factions.to_vec();
        }
    }

    pub fn toggle(&mut self, faction: &str) {
        if !self.enabled.remove(faction) {
            self.enabled.insert(faction.to_string());
        }
    }

    pub fn enable_all(&mut self) {
        self.enabled = self.known.iter().cloned().collect();
    }

    pub fn disable_all(&mut self) {
        self.enabled.clear();
    }

    pub fn is_enabled(&self, faction: &str) -> bool {
        self.enabled.contains(faction)
    }

    /// Factions known to the filter, sorted.
    pub fn known(&self) -> &[String] {
        &self.known
    }
}

/// Filter to enabled factions, then apply the sort order. Sorts are stable:
/// characters comparing equal keep their relative roster order.
pub fn project(characters: &[Character], filter: &FactionFilter, sort: SortOrder) -> Vec<Character> {
    let mut visible: Vec<Character> = characters
        .iter()
        .filter(|c| filter.is_enabled(&c.faction))
        .cloned()
        .collect();

    match sort {
        SortOrder::InsertionOrder => {}
        SortOrder::ValueDesc => visible.sort_by(|a, b| b.value().cmp(&a.value())),
        SortOrder::ValueAsc => visible.sort_by(|a, b| a.value().cmp(&b.value())),
        SortOrder::NameAsc => visible.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
    }

    visible
}

/// Stateful view over the roster: holds the current sort order and faction
/// filter, and projects on demand.
pub struct RosterView {
    roster: Arc<RosterStore>,
    state: RwLock<ViewState>,
}

#[derive(Default)]
struct ViewState {
    filter: FactionFilter,
    sort: SortOrder,
}

impl RosterView {
    pub fn new(roster: Arc<RosterStore>) -> Self {
        Self {
            roster,
            state: RwLock::new(ViewState::default()),
        }
    }

    pub async fn set_sort_order(&self, sort: SortOrder) {
        self.state.write().await.sort = sort;
    }

    pub async fn sort_order(&self) -> SortOrder {
        self.state.read().await.sort
    }

    pub async fn toggle_faction(&self, faction: &str) {
        let mut state = self.state.write().await;
        state.filter.toggle(faction);
    }

    pub async fn enable_all_factions(&self) {
        self.state.write().await.filter.enable_all();
    }

    pub async fn disable_all_factions(&self) {
        self.state.write().await.filter.disable_all();
    }

    /// Current projection. Re-syncs the faction filter against the roster
    /// first, so a faction-set change resets the filter to all-enabled.
    pub async fn visible_characters(&self) -> Vec<Character> {
        let characters = self.roster.list().await;
        let factions = self.roster.distinct_factions().await;

        let mut state = self.state.write().await;
        state.filter.sync(&factions);
        project(&characters, &state.filter, state.sort)
    }
}
