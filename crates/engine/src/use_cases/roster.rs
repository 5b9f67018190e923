//! Roster mutation use cases.
//!
//! All mutations go through [`RosterAdmin`], a handle that can only be
//! constructed with an [`AdminCapability`] token. The engine itself never
//! checks authorization; whoever composes the application resolves it
//! out-of-band and decides whether to mint the token.

use std::sync::Arc;

use squadbldr_domain::{Character, CharacterId, DomainError};

use crate::infrastructure::ports::RosterRecord;
use crate::stores::{RosterStore, SelectionStore};

/// Capability token gating roster mutation.
///
/// Minted by the surrounding system after its own authorization check (for
/// example a shared-secret comparison). Holding a [`RosterAdmin`] handle is
/// the proof of privilege; no ambient admin flag exists anywhere.
#[derive(Debug)]
pub struct AdminCapability {
    _priv: (),
}

impl AdminCapability {
    pub fn grant() -> Self {
        Self { _priv: () }
    }
}

/// Mutation-exposing handle over the roster.
pub struct RosterAdmin {
    roster: Arc<RosterStore>,
    selection: Arc<SelectionStore>,
    _capability: AdminCapability,
}

impl RosterAdmin {
    pub fn new(
        roster: Arc<RosterStore>,
        selection: Arc<SelectionStore>,
        capability: AdminCapability,
    ) -> Self {
        Self {
            roster,
            selection,
            _capability: capability,
        }
    }

    /// Add a single character to the front of the roster.
    pub async fn add_character(
        &self,
        name: impl Into<String>,
        faction: impl Into<String>,
        value: u32,
    ) -> Character {
        let character = Character::new(name, faction, value);
        tracing::info!(id = %character.id, name = %character.name, "Adding character to roster");
        self.roster.add(character.clone()).await;
        character
    }

    /// Add a batch of pre-parsed records (bulk import parsing itself is the
    /// caller's concern).
    pub async fn add_characters(&self, records: Vec<RosterRecord>) -> Vec<Character> {
        let characters: Vec<Character> = records
            .into_iter()
            .map(RosterRecord::into_character)
            .collect();
        tracing::info!(count = characters.len(), "Bulk-adding characters to roster");
        self.roster.add_many(characters.clone()).await;
        characters
    }

    /// Delete a character, eagerly clearing its id from the selection set so
    /// no dangling selection ids survive the mutation. Returns the removed
    /// character, or `None` if it was already gone.
    pub async fn delete_character(&self, id: CharacterId) -> Option<Character> {
        let removed = self.roster.remove(id).await;
        self.selection.remove(id).await;
        match &removed {
            Some(character) => {
                tracing::info!(id = %id, name = %character.name, "Deleted character from roster");
            }
            None => tracing::warn!(id = %id, "Delete requested for unknown character"),
        }
        removed
    }

    /// Set a character's value. Below-minimum inputs are clamped, not
    /// rejected.
    pub async fn set_value(&self, id: CharacterId, value: u32) -> Result<Character, DomainError> {
        self.roster.set_value(id, value).await
    }

    /// Apply a signed delta to a character's value, clamped at the minimum.
    pub async fn adjust_value(
        &self,
        id: CharacterId,
        delta: i64,
    ) -> Result<Character, DomainError> {
        self.roster.adjust_value(id, delta).await
    }
}
