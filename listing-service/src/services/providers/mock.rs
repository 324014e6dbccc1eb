//! Mock provider implementation for testing.

use super::{CompletionProvider, ProviderError};
use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned outcome returned by the mock.
enum MockOutcome {
    Respond(serde_json::Value),
    Fail(String),
}

/// Mock completion provider that records every request it receives.
pub struct MockCompletionProvider {
    outcome: MockOutcome,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockCompletionProvider {
    /// Respond to every request with `response`.
    pub fn responding(response: serde_json::Value) -> Self {
        Self {
            outcome: MockOutcome::Respond(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.outcome {
            MockOutcome::Respond(value) => Ok(value.clone()),
            MockOutcome::Fail(message) => Err(ProviderError::ApiError {
                status: 500,
                message: message.clone(),
            }),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.outcome {
            MockOutcome::Respond(_) => Ok(()),
            MockOutcome::Fail(message) => Err(ProviderError::NotConfigured(message.clone())),
        }
    }
}
