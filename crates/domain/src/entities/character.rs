//! Character entity - roster members eligible for team generation.
//!
//! Characters are owned exclusively by the roster store. Every other
//! component refers to them by `CharacterId` or takes an explicit snapshot
//! clone, so roster mutations never drift through shared references.

use serde::{Deserialize, Serialize};
use squadbldr_domain::CharacterId;

/// Minimum allowed character value. Updates below this are clamped, not
/// rejected, so a large negative adjustment still leaves a usable roster.
pub const MIN_VALUE: u32 = 1;

/// A character on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Faction the character belongs to (e.g., "DC", "Marvel").
    pub faction: String,
    /// Power value used by the oracle to balance teams. Always >= 1.
    #[serde(deserialize_with = "deserialize_clamped_value")]
    value: u32,
}

fn deserialize_clamped_value<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u32::deserialize(deserializer).map(|v| v.max(MIN_VALUE))
}

impl Character {
    /// Create a character with a fresh id. The value is clamped to
    /// [`MIN_VALUE`].
    pub fn new(name: impl Into<String>, faction: impl Into<String>, value: u32) -> Self {
        Self::with_id(CharacterId::new(), name, faction, value)
    }

    /// Create a character with a caller-supplied id (roster source records
    /// may carry their own ids).
    pub fn with_id(
        id: CharacterId,
        name: impl Into<String>,
        faction: impl Into<String>,
        value: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction: faction.into(),
            value: value.max(MIN_VALUE),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set the value, clamping below-minimum inputs to [`MIN_VALUE`].
    pub fn set_value(&mut self, value: u32) {
        self.value = value.max(MIN_VALUE);
    }

    /// Apply a signed delta to the value, saturating at [`MIN_VALUE`] for
    /// any negative delta, however large.
    pub fn adjust_value(&mut self, delta: i64) {
        let adjusted = i64::from(self.value).saturating_add(delta);
        self.value = u32::try_from(adjusted.max(i64::from(MIN_VALUE))).unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_zero_value_to_minimum() {
        let c = Character::new("Superman", "DC", 0);
        assert_eq!(c.value(), MIN_VALUE);
    }

    #[test]
    fn set_value_clamps_below_minimum() {
        let mut c = Character::new("Batman", "DC", 80);
        c.set_value(0);
        assert_eq!(c.value(), MIN_VALUE);
    }

    #[test]
    fn adjust_value_saturates_at_minimum_for_large_negative_delta() {
        let mut c = Character::new("Iron Man", "Marvel", 90);
        c.adjust_value(i64::MIN);
        assert_eq!(c.value(), MIN_VALUE);
    }

    #[test]
    fn adjust_value_applies_positive_delta() {
        let mut c = Character::new("Iron Man", "Marvel", 90);
        c.adjust_value(5);
        assert_eq!(c.value(), 95);
    }

    #[test]
    fn deserializing_a_below_minimum_value_clamps_it() {
        let json = format!(
            r#"{{"id":"{}","name":"Bane","faction":"DC","value":0}}"#,
            CharacterId::new()
        );
        let c: Character = serde_json::from_str(&json).expect("valid character json");
        assert_eq!(c.value(), MIN_VALUE);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let c = Character::new("Wonder Woman", "DC", 85);
        let json = serde_json::to_value(&c).expect("serializable");
        assert!(json.get("faction").is_some());
        assert_eq!(json["value"], 85);
    }
}
