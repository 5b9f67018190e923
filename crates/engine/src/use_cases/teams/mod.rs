//! Team generation use cases - the core of the system.
//!
//! Given the selection set and a target team count, builds the oracle
//! request, invokes the oracle, validates and reconciles the response into
//! authoritative characters, and manages the transient result until it is
//! saved or replaced.
//!
//! One generation is expected to be in flight at a time per selection
//! context; serializing calls (e.g., disabling the trigger) is the caller's
//! responsibility. There are no internal retries, queues, or cancellation.

mod prompt;
mod response;

#[cfg(test)]
mod llm_integration_tests;

pub use response::{OracleReply, RawMember, RawTeam, ShapeError};

use std::sync::Arc;

use tokio::sync::RwLock;

use squadbldr_domain::{Character, DomainError, SavedTeamSet, SavedTeamSetId, Team};

use crate::infrastructure::ports::{ClockPort, LlmError, LlmPort};
use crate::stores::{RosterStore, SavedTeamSetStore, SelectionStore};

/// Failures of a generation attempt. Each variant carries the single
/// human-readable message shown in place of any prior result.
#[derive(Debug, thiserror::Error)]
pub enum TeamGenError {
    #[error("at least 2 teams are required")]
    InvalidTeamCount { team_count: u32 },

    #[error("at least {team_count} characters are required to form {team_count} teams")]
    NotEnoughCharacters { selected: usize, team_count: u32 },

    /// Transport/availability failure; retryable by the user, never
    /// automatically.
    #[error("could not reach the team balancing service, please try again: {0}")]
    Oracle(#[from] LlmError),

    /// The oracle's response was not parseable JSON.
    #[error("the balancing service returned an unreadable response, generate again")]
    UnparseableResponse,

    /// Parseable JSON that lacks the `teams` contract.
    #[error("the balancing service returned an unexpected response shape, generate again")]
    UnexpectedShape,
}

/// Orchestrates team generation and the saved-set lifecycle.
pub struct TeamUseCases {
    llm: Arc<dyn LlmPort>,
    clock: Arc<dyn ClockPort>,
    roster: Arc<RosterStore>,
    selection: Arc<SelectionStore>,
    saved: Arc<SavedTeamSetStore>,
    /// The transient result of the latest successful generation. Replaced on
    /// every attempt, consumed exactly once by a save.
    current: RwLock<Vec<Team>>,
}

impl TeamUseCases {
    pub fn new(
        llm: Arc<dyn LlmPort>,
        clock: Arc<dyn ClockPort>,
        roster: Arc<RosterStore>,
        selection: Arc<SelectionStore>,
        saved: Arc<SavedTeamSetStore>,
    ) -> Self {
        Self {
            llm,
            clock,
            roster,
            selection,
            saved,
            current: RwLock::new(Vec::new()),
        }
    }

    /// Generate a partition of the selected characters into `team_count`
    /// teams.
    ///
    /// Validation failures are reported synchronously; the oracle is never
    /// invoked for them. Any failure clears the previous result, so an
    /// error message is never shown alongside stale teams.
    pub async fn generate(&self, team_count: u32) -> Result<Vec<Team>, TeamGenError> {
        let selected = self.selected_characters().await;

        if team_count < 2 {
            return Err(TeamGenError::InvalidTeamCount { team_count });
        }
        if selected.len() < team_count as usize {
            return Err(TeamGenError::NotEnoughCharacters {
                selected: selected.len(),
                team_count,
            });
        }

        // Replace any previous result before the oracle call; a failure must
        // not leave stale teams behind.
        self.current.write().await.clear();

        let request = prompt::build_request(&selected, team_count);
        let response = self.llm.generate(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Oracle token usage"
            );
        }

        let teams = match response::parse_oracle_reply(&response.content) {
            OracleReply::ValidShape(raw_teams) => response::reconcile(&selected, raw_teams),
            OracleReply::MalformedShape(ShapeError::NotJson) => {
                return Err(TeamGenError::UnparseableResponse)
            }
            OracleReply::MalformedShape(ShapeError::MissingTeams) => {
                return Err(TeamGenError::UnexpectedShape)
            }
        };

        tracing::info!(
            team_count = teams.len(),
            placed = teams.iter().map(|t| t.members.len()).sum::<usize>(),
            selected = selected.len(),
            "Generated team partition"
        );

        *self.current.write().await = teams.clone();
        Ok(teams)
    }

    /// The transient result awaiting a save, if any.
    pub async fn current_teams(&self) -> Vec<Team> {
        self.current.read().await.clone()
    }

    /// Snapshot the current generation result under the given name and
    /// clear it; the transient result is consumed exactly once.
    pub async fn save_teams(&self, name: &str) -> Result<SavedTeamSet, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("a team set name is required"));
        }

        let mut current = self.current.write().await;
        if current.is_empty() {
            return Err(DomainError::constraint("no generation result to save"));
        }

        let teams = std::mem::take(&mut *current);
        let set = self.saved.save(name.trim(), teams, self.clock.now()).await?;
        tracing::info!(id = %set.id, name = %set.name, "Saved team set");
        Ok(set)
    }

    /// Delete a saved set; no-op if absent.
    pub async fn delete_saved(&self, id: SavedTeamSetId) {
        self.saved.delete(id).await;
    }

    /// All saved sets, most-recent-first.
    pub async fn saved_sets(&self) -> Vec<SavedTeamSet> {
        self.saved.list().await
    }

    /// Selected characters resolved against the authoritative roster, in
    /// roster order.
    async fn selected_characters(&self) -> Vec<Character> {
        let ids = self.selection.ids().await;
        self.roster
            .list()
            .await
            .into_iter()
            .filter(|c| ids.contains(&c.id))
            .collect()
    }
}
