//! Hand-rolled LLM fakes for deterministic oracle-path tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Fake oracle that replays canned responses in order.
pub struct ScriptedLlm {
    replies: Vec<Result<String, LlmError>>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    /// Always answers with the same content.
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            replies: vec![Ok(content.into())],
            calls: AtomicUsize::new(0),
        }
    }

    /// Answers once, then fails with a transport error.
    pub fn replying_then_failing(content: impl Into<String>) -> Self {
        Self {
            replies: vec![
                Ok(content.into()),
                Err(LlmError::RequestFailed("connection refused".to_string())),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    /// Panics if invoked at all - for asserting the oracle is never called.
    pub fn panicking() -> Self {
        Self {
            replies: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmPort for ScriptedLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .get(call.min(self.replies.len().saturating_sub(1)))
            .unwrap_or_else(|| panic!("oracle invoked unexpectedly (call #{})", call + 1));

        match reply {
            Ok(content) => Ok(LlmResponse {
                content: content.clone(),
                usage: None,
            }),
            Err(LlmError::RequestFailed(msg)) => Err(LlmError::RequestFailed(msg.clone())),
            Err(LlmError::InvalidResponse(msg)) => Err(LlmError::InvalidResponse(msg.clone())),
        }
    }
}

/// Fake oracle that always fails at the transport level.
pub struct FailingLlm {
    message: String,
}

impl FailingLlm {
    pub fn unreachable() -> Self {
        Self {
            message: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl LlmPort for FailingLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        Err(LlmError::RequestFailed(self.message.clone()))
    }
}
