//! Application state and composition.

use std::sync::Arc;

use squadbldr_domain::Character;

use crate::infrastructure::ports::{ClockPort, LlmPort, RosterRecord, RosterSource, RosterSourceError};
use crate::stores::{RosterStore, SavedTeamSetStore, SelectionStore};
use crate::use_cases::{
    AdminCapability, RosterAdmin, RosterView, SelectionUseCases, TeamUseCases,
};

/// Main application state.
///
/// Holds the session stores and use cases. The presentation layer (UI,
/// server, whatever composes this) drives it in response to user actions
/// and is responsible for serializing generation calls - at most one
/// oracle request may be in flight per selection context.
pub struct App {
    pub roster: Arc<RosterStore>,
    pub selection: Arc<SelectionStore>,
    pub saved_team_sets: Arc<SavedTeamSetStore>,
    pub selections: SelectionUseCases,
    pub view: RosterView,
    pub teams: TeamUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(llm: Arc<dyn LlmPort>, clock: Arc<dyn ClockPort>) -> Self {
        let roster = Arc::new(RosterStore::new());
        let selection = Arc::new(SelectionStore::new());
        let saved_team_sets = Arc::new(SavedTeamSetStore::new());

        let selections = SelectionUseCases::new(roster.clone(), selection.clone());
        let view = RosterView::new(roster.clone());
        let teams = TeamUseCases::new(
            llm,
            clock,
            roster.clone(),
            selection.clone(),
            saved_team_sets.clone(),
        );

        Self {
            roster,
            selection,
            saved_team_sets,
            selections,
            view,
            teams,
        }
    }

    /// Fetch the initial character collection from the roster source and
    /// install it. A failure here is a blocking error state for the rest of
    /// the system; the caller decides how to surface it.
    pub async fn load_roster(
        &self,
        source: &dyn RosterSource,
    ) -> Result<usize, RosterSourceError> {
        let records = source.load().await?;
        let characters: Vec<Character> = records
            .into_iter()
            .map(RosterRecord::into_character)
            .collect();
        let count = characters.len();
        self.roster.replace_all(characters).await;
        tracing::info!(count, "Roster loaded");
        Ok(count)
    }

    /// Construct the mutation-exposing roster handle. The capability token
    /// is minted by the surrounding system after its own authorization
    /// check; the engine exposes all operations unconditionally to holders.
    pub fn admin(&self, capability: AdminCapability) -> RosterAdmin {
        RosterAdmin::new(self.roster.clone(), self.selection.clone(), capability)
    }
}
