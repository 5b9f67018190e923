//! Team and saved team set entities.
//!
//! Teams are produced only by the generation orchestrator; saved team sets
//! are deep snapshots taken at save time, so later roster mutations never
//! retroactively alter a saved set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use squadbldr_domain::{Character, SavedTeamSetId};

/// A generated team: a creative name plus the reconciled members, in the
/// order the oracle proposed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_name: String,
    pub members: Vec<Character>,
}

impl Team {
    pub fn new(team_name: impl Into<String>, members: Vec<Character>) -> Self {
        Self {
            team_name: team_name.into(),
            members,
        }
    }

    /// Combined value of all members.
    pub fn total_value(&self) -> u64 {
        self.members.iter().map(|m| u64::from(m.value())).sum()
    }
}

/// A named, immutable snapshot of a past generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTeamSet {
    pub id: SavedTeamSetId,
    pub name: String,
    pub teams: Vec<Team>,
    pub created_at: DateTime<Utc>,
}

impl SavedTeamSet {
    pub fn new(name: impl Into<String>, teams: Vec<Team>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: SavedTeamSetId::new(),
            name: name.into(),
            teams,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_value_sums_members() {
        let team = Team::new(
            "Alpha",
            vec![
                Character::new("Superman", "DC", 98),
                Character::new("Iron Man", "Marvel", 90),
            ],
        );
        assert_eq!(team.total_value(), 188);
    }

    #[test]
    fn team_serializes_with_wire_field_names() {
        let team = Team::new("Alpha", vec![]);
        let json = serde_json::to_value(&team).expect("serializable");
        assert!(json.get("teamName").is_some());
        assert!(json.get("members").is_some());
    }

    #[test]
    fn saved_sets_get_unique_ids() {
        let now = Utc::now();
        let a = SavedTeamSet::new("First", vec![], now);
        let b = SavedTeamSet::new("Second", vec![], now);
        assert_ne!(a.id, b.id);
    }
}
