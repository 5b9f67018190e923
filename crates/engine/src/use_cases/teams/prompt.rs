//! Prompt construction for the balancing oracle.
//!
//! The request carries each selected character's id, name, faction, and
//! value, plus the requested team count. Ids are included so the response
//! can be mapped back unambiguously; the oracle is never trusted to echo
//! any other field. Balance and faction-synergy instructions are hints, not
//! verified outputs.

use squadbldr_domain::Character;

use crate::infrastructure::ports::{ChatMessage, LlmRequest, ResponseSchema};

const SYSTEM_PROMPT: &str = "You are an expert strategist for building balanced video game teams. \
    You split a given list of characters into the requested number of teams. \
    Respond with JSON only, conforming to the provided schema: an object with a 'teams' array, \
    each team carrying a creative 'teamName' and a 'members' array of objects holding only the \
    character 'id'.";

/// Build the oracle request for one generation attempt.
pub fn build_request(selected: &[Character], team_count: u32) -> LlmRequest {
    let character_list: String = selected
        .iter()
        .map(|c| {
            format!(
                "- {} (ID: {}, Faction: {}, Value: {})",
                c.name,
                c.id,
                c.faction,
                c.value()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let user_prompt = format!(
        "Create {team_count} balanced teams from the following characters.\n\n\
        Balancing considerations:\n\
        1. Keep the sum of member Values as similar as possible across teams.\n\
        2. Consider Faction for thematic synergies.\n\
        3. Assign every listed character to exactly one team.\n\
        4. For each team member, include only their 'id' in the response.\n\n\
        Characters:\n{character_list}\n\n\
        Respond with JSON only."
    );

    LlmRequest::new(vec![ChatMessage::user(user_prompt)])
        .with_system_prompt(SYSTEM_PROMPT)
        .with_temperature(0.7)
        .with_response_schema(ResponseSchema::new("team_partition", response_schema()))
}

/// The declared response schema: `{ teams: [{ teamName, members: [{ id }] }] }`.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "teams": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "teamName": {
                            "type": "string",
                            "description": "A creative name for the team."
                        },
                        "members": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "id": {
                                        "type": "string",
                                        "description": "The id of a character from the list."
                                    }
                                },
                                "required": ["id"]
                            }
                        }
                    },
                    "required": ["teamName", "members"]
                }
            }
        },
        "required": ["teams"]
    })
}
