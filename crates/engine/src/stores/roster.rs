//! Authoritative roster storage.
//!
//! The roster owns every `Character`; other components hold ids or explicit
//! snapshot clones. Insertion order is preserved, with new characters added
//! newest-first.

use tokio::sync::RwLock;

use squadbldr_domain::{Character, CharacterId, DomainError};

/// In-memory store for the authoritative character collection.
#[derive(Default)]
pub struct RosterStore {
    characters: RwLock<Vec<Character>>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection (startup load path).
    pub async fn replace_all(&self, characters: Vec<Character>) {
        *self.characters.write().await = characters;
    }

    /// Add a character at the front of the roster (newest-first).
    pub async fn add(&self, character: Character) {
        self.characters.write().await.insert(0, character);
    }

    /// Add several characters at the front, preserving their given order.
    pub async fn add_many(&self, characters: Vec<Character>) {
        let mut guard = self.characters.write().await;
        for character in characters.into_iter().rev() {
            guard.insert(0, character);
        }
    }

    /// Remove a character. Returns the removed entry, or `None` if absent.
    pub async fn remove(&self, id: CharacterId) -> Option<Character> {
        let mut guard = self.characters.write().await;
        let index = guard.iter().position(|c| c.id == id)?;
        Some(guard.remove(index))
    }

    pub async fn get(&self, id: CharacterId) -> Option<Character> {
        self.characters
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Snapshot of the roster in insertion order.
    pub async fn list(&self) -> Vec<Character> {
        self.characters.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.characters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.characters.read().await.is_empty()
    }

    /// Set a character's value (clamped at the domain minimum).
    pub async fn set_value(&self, id: CharacterId, value: u32) -> Result<Character, DomainError> {
        let mut guard = self.characters.write().await;
        let character = guard
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Character", id.to_string()))?;
        character.set_value(value);
        Ok(character.clone())
    }

    /// Apply a signed delta to a character's value (clamped at the minimum).
    pub async fn adjust_value(
        &self,
        id: CharacterId,
        delta: i64,
    ) -> Result<Character, DomainError> {
        let mut guard = self.characters.write().await;
        let character = guard
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Character", id.to_string()))?;
        character.adjust_value(delta);
        Ok(character.clone())
    }

    /// Sorted, deduplicated list of factions currently present.
    pub async fn distinct_factions(&self) -> Vec<String> {
        let mut factions: Vec<String> = self
            .characters
            .read()
            .await
            .iter()
            .map(|c| c.faction.clone())
            .collect();
        factions.sort();
        factions.dedup();
        factions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_is_newest_first() {
        let store = RosterStore::new();
        store.add(Character::new("Superman", "DC", 98)).await;
        store.add(Character::new("Batman", "DC", 80)).await;

        let list = store.list().await;
        assert_eq!(list[0].name, "Batman");
        assert_eq!(list[1].name, "Superman");
    }

    #[tokio::test]
    async fn add_many_preserves_batch_order_at_front() {
        let store = RosterStore::new();
        store.add(Character::new("Superman", "DC", 98)).await;
        store
            .add_many(vec![
                Character::new("Iron Man", "Marvel", 90),
                Character::new("Thor", "Marvel", 95),
            ])
            .await;

        let names: Vec<_> = store.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Iron Man", "Thor", "Superman"]);
    }

    #[tokio::test]
    async fn remove_returns_the_character_and_is_none_when_absent() {
        let store = RosterStore::new();
        let c = Character::new("Batman", "DC", 80);
        let id = c.id;
        store.add(c).await;

        assert_eq!(store.remove(id).await.map(|c| c.name).as_deref(), Some("Batman"));
        assert!(store.remove(id).await.is_none());
    }

    #[tokio::test]
    async fn set_value_clamps_and_adjust_saturates() {
        let store = RosterStore::new();
        let c = Character::new("Batman", "DC", 80);
        let id = c.id;
        store.add(c).await;

        let updated = store.set_value(id, 0).await.expect("character exists");
        assert_eq!(updated.value(), 1);

        let updated = store.adjust_value(id, -1_000_000).await.expect("character exists");
        assert_eq!(updated.value(), 1);
    }

    #[tokio::test]
    async fn value_updates_on_missing_character_are_not_found() {
        let store = RosterStore::new();
        let err = store
            .set_value(CharacterId::new(), 10)
            .await
            .expect_err("must fail");
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn distinct_factions_are_sorted_and_deduped() {
        let store = RosterStore::new();
        store.add(Character::new("Iron Man", "Marvel", 90)).await;
        store.add(Character::new("Superman", "DC", 98)).await;
        store.add(Character::new("Batman", "DC", 80)).await;

        assert_eq!(store.distinct_factions().await, vec!["DC", "Marvel"]);
    }
}
