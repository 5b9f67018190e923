//! LLM integration test helpers for Ollama.
//!
//! Utilities for running integration tests against a local Ollama instance.
//! All tests using these helpers are `#[ignore]`d by default; run them with
//! `cargo test -p squadbldr-engine -- --ignored` and a local model pulled.

use crate::infrastructure::ollama::OllamaClient;
use crate::infrastructure::ports::{ChatMessage, LlmPort, LlmRequest};

/// Creates an OllamaClient configured for integration testing.
///
/// Uses environment variables for configuration:
/// - `OLLAMA_BASE_URL`: Base URL for Ollama (default: http://localhost:11434)
/// - `OLLAMA_MODEL`: Model to use
pub fn create_test_ollama_client() -> OllamaClient {
    OllamaClient::from_env()
}

/// Check if Ollama is available for integration tests.
pub async fn ollama_available() -> bool {
    let client = create_test_ollama_client();

    // Try a minimal request to check availability
    let request = LlmRequest::new(vec![ChatMessage::user("Hi")])
        .with_temperature(0.0)
        .with_max_tokens(Some(5));

    client.generate(request).await.is_ok()
}
