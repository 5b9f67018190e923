//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - LLM calls (could swap Ollama -> Claude/OpenAI)
//! - Roster loading (could swap JSON file -> HTTP fetch)
//! - Clock (for testing)
//!
//! The oracle behind [`LlmPort`] is an untrusted black box: nothing in its
//! output is believed except structural shape and member ids, and those ids
//! are reconciled against the authoritative roster before use.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use squadbldr_domain::{Character, CharacterId};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RosterSourceError {
    #[error("Roster source unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed roster data: {0}")]
    Malformed(String),
}

// =============================================================================
// LLM Port
// =============================================================================

/// A single chat completion request to the balancing oracle.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The conversation history
    pub messages: Vec<ChatMessage>,
    /// System prompt / context
    pub system_prompt: Option<String>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Declared JSON schema the response must conform to
    pub response_schema: Option<ResponseSchema>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            response_schema: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_response_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// A declared response schema, passed to schema-capable endpoints.
///
/// The schema constrains what well-behaved oracles return; it is a contract
/// declaration, not a guarantee. Responses are still fully validated.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

impl ResponseSchema {
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A message in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// Response from the LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
    /// Token usage
    pub usage: Option<TokenUsage>,
}

/// Token usage information
#[derive(Debug, Clone)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// Roster Source Port
// =============================================================================

/// A character record as delivered by the startup roster source.
///
/// Records may carry their own id; records without one (or with an id the
/// roster cannot parse) get a fresh id at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub faction: String,
    pub value: u32,
}

impl RosterRecord {
    pub fn new(name: impl Into<String>, faction: impl Into<String>, value: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            faction: faction.into(),
            value,
        }
    }

    /// Convert into an owned roster character, assigning a fresh id when the
    /// record has none. Value clamping happens in the `Character` constructor.
    pub fn into_character(self) -> Character {
        let id = self
            .id
            .as_deref()
            .and_then(|raw| raw.parse::<CharacterId>().ok())
            .unwrap_or_else(CharacterId::new);
        Character::with_id(id, self.name, self.faction, self.value)
    }
}

/// Provides the initial character collection, fetched once at startup.
/// A load failure is a blocking error for the rest of the system.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load(&self) -> Result<Vec<RosterRecord>, RosterSourceError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
