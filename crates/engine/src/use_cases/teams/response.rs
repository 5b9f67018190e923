//! Oracle response parsing and reconciliation.
//!
//! The oracle's raw text is parsed into a tagged [`OracleReply`]; only a
//! structurally valid reply ever reaches reconciliation. Reconciliation maps
//! returned member ids back to the authoritative selected characters and
//! silently drops anything the oracle hallucinated - a wrong or partial
//! character object must never propagate, only a fully reconciled one or
//! nothing.

use std::collections::HashMap;

use serde::Deserialize;

use squadbldr_domain::{Character, CharacterId, Team};

/// A team as returned by the oracle: trusted for shape, not content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

/// A member reference in the oracle's response. Only the id is carried.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct RawPartition {
    teams: Vec<RawTeam>,
}

/// Outcome of parsing the oracle's raw text.
#[derive(Debug)]
pub enum OracleReply {
    /// The response matched the declared shape.
    ValidShape(Vec<RawTeam>),
    /// The response deviated from the contract.
    MalformedShape(ShapeError),
}

/// How the response deviated from the declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Not parseable as JSON at all.
    NotJson,
    /// Parseable JSON, but the `teams` key is missing or not an array of
    /// the declared team shape.
    MissingTeams,
}

/// Parse raw oracle output into a tagged reply. Never fails; malformed input
/// is data, not an error, at this level.
pub fn parse_oracle_reply(raw: &str) -> OracleReply {
    let cleaned = strip_code_fences(raw.trim());

    let value: serde_json::Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Oracle response is not valid JSON");
            return OracleReply::MalformedShape(ShapeError::NotJson);
        }
    };

    if value.get("teams").is_none() {
        tracing::warn!("Oracle response lacks the 'teams' key");
        return OracleReply::MalformedShape(ShapeError::MissingTeams);
    }

    match serde_json::from_value::<RawPartition>(value) {
        Ok(partition) => OracleReply::ValidShape(partition.teams),
        Err(e) => {
            tracing::warn!(error = %e, "Oracle 'teams' array does not match the declared shape");
            OracleReply::MalformedShape(ShapeError::MissingTeams)
        }
    }
}

/// Some models wrap JSON output in markdown code fences even when told not
/// to. Strip a single leading/trailing fence pair if present.
fn strip_code_fences(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches('\n')
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(raw)
}

/// Map oracle-returned member ids back to the authoritative selected
/// characters.
///
/// Pure function of (selected, raw teams). Unmatched ids are dropped with a
/// warning; team order and member order are preserved; no dedup-merging and
/// no completeness check - an incomplete partition is reported as a
/// best-effort result, and regeneration is the remedy.
pub fn reconcile(selected: &[Character], raw_teams: Vec<RawTeam>) -> Vec<Team> {
    let by_id: HashMap<CharacterId, &Character> = selected.iter().map(|c| (c.id, c)).collect();

    raw_teams
        .into_iter()
        .map(|raw| {
            let members: Vec<Character> = raw
                .members
                .iter()
                .filter_map(|member| {
                    let resolved = member
                        .id
                        .parse::<CharacterId>()
                        .ok()
                        .and_then(|id| by_id.get(&id))
                        .map(|c| (*c).clone());
                    if resolved.is_none() {
                        tracing::warn!(
                            team = %raw.team_name,
                            member_id = %member.id,
                            "Dropping oracle member id with no selected counterpart"
                        );
                    }
                    resolved
                })
                .collect();

            Team::new(raw.team_name, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_pair() -> Vec<Character> {
        vec![
            Character::new("Superman", "DC", 98),
            Character::new("Iron Man", "Marvel", 90),
        ]
    }

    #[test]
    fn valid_response_parses_to_valid_shape() {
        let raw = r#"{"teams":[{"teamName":"Alpha","members":[{"id":"abc"}]}]}"#;
        match parse_oracle_reply(raw) {
            OracleReply::ValidShape(teams) => {
                assert_eq!(teams.len(), 1);
                assert_eq!(teams[0].team_name, "Alpha");
            }
            other => panic!("expected valid shape, got {other:?}"),
        }
    }

    #[test]
    fn non_json_is_malformed() {
        match parse_oracle_reply("sorry, I cannot do that") {
            OracleReply::MalformedShape(ShapeError::NotJson) => {}
            other => panic!("expected NotJson, got {other:?}"),
        }
    }

    #[test]
    fn missing_teams_key_is_malformed() {
        match parse_oracle_reply(r#"{"result": []}"#) {
            OracleReply::MalformedShape(ShapeError::MissingTeams) => {}
            other => panic!("expected MissingTeams, got {other:?}"),
        }
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n{\"teams\":[]}\n```";
        assert!(matches!(parse_oracle_reply(raw), OracleReply::ValidShape(t) if t.is_empty()));
    }

    #[test]
    fn team_without_members_key_parses_as_empty() {
        let raw = r#"{"teams":[{"teamName":"Solo"}]}"#;
        match parse_oracle_reply(raw) {
            OracleReply::ValidShape(teams) => assert!(teams[0].members.is_empty()),
            other => panic!("expected valid shape, got {other:?}"),
        }
    }

    #[test]
    fn reconcile_drops_unmatched_ids() {
        let selected = selected_pair();
        let raw = vec![RawTeam {
            team_name: "A".to_string(),
            members: vec![
                RawMember {
                    id: selected[0].id.to_string(),
                },
                RawMember {
                    id: "9".to_string(),
                },
            ],
        }];

        let teams = reconcile(&selected, raw);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_name, "A");
        assert_eq!(teams[0].members.len(), 1);
        assert_eq!(teams[0].members[0].id, selected[0].id);
    }

    #[test]
    fn reconcile_preserves_team_and_member_order() {
        let selected = selected_pair();
        let raw = vec![
            RawTeam {
                team_name: "Second listed first".to_string(),
                members: vec![
                    RawMember {
                        id: selected[1].id.to_string(),
                    },
                    RawMember {
                        id: selected[0].id.to_string(),
                    },
                ],
            },
            RawTeam {
                team_name: "Empty".to_string(),
                members: vec![],
            },
        ];

        let teams = reconcile(&selected, raw);
        assert_eq!(teams[0].members[0].id, selected[1].id);
        assert_eq!(teams[0].members[1].id, selected[0].id);
        assert_eq!(teams[1].team_name, "Empty");
    }

    #[test]
    fn reconcile_never_invents_members_for_unplaced_characters() {
        let selected = selected_pair();
        // Oracle only placed one of the two selected characters.
        let raw = vec![RawTeam {
            team_name: "A".to_string(),
            members: vec![RawMember {
                id: selected[0].id.to_string(),
            }],
        }];

        let teams = reconcile(&selected, raw);
        let placed: usize = teams.iter().map(|t| t.members.len()).sum();
        assert_eq!(placed, 1);
    }
}
