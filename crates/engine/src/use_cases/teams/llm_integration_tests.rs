//! LLM integration tests for team generation.
//!
//! These verify that a real model produces a reconcilable partition.
//! Run with: `cargo test -p squadbldr-engine teams::llm_integration -- --ignored`

use squadbldr_domain::Character;

use super::{prompt, response, OracleReply};
use crate::infrastructure::ports::LlmPort;
use crate::test_fixtures::llm_integration::*;

#[tokio::test]
#[ignore = "requires ollama"]
async fn test_llm_produces_reconcilable_partition() {
    let client = create_test_ollama_client();

    let selected = vec![
        Character::new("Superman", "DC", 98),
        Character::new("Batman", "DC", 80),
        Character::new("Wonder Woman", "DC", 92),
        Character::new("Iron Man", "Marvel", 90),
        Character::new("Thor", "Marvel", 95),
        Character::new("Black Widow", "Marvel", 70),
    ];

    let request = prompt::build_request(&selected, 2);
    let llm_response = client.generate(request).await.expect("LLM request failed");

    let raw_teams = match response::parse_oracle_reply(&llm_response.content) {
        OracleReply::ValidShape(teams) => teams,
        OracleReply::MalformedShape(err) => {
            panic!("malformed oracle reply ({err:?}): {}", llm_response.content)
        }
    };

    let teams = response::reconcile(&selected, raw_teams);
    assert_eq!(teams.len(), 2, "model should produce exactly 2 teams");

    let placed: usize = teams.iter().map(|t| t.members.len()).sum();
    assert!(
        placed >= selected.len() / 2,
        "model placed too few known characters: {placed} of {}",
        selected.len()
    );
}
