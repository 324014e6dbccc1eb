//! OpenAI chat-completion provider.
//!
//! Sends a single `POST /chat/completions` per call. No retries and no
//! client-side timeout beyond reqwest's defaults.

use super::{CompletionProvider, ProviderError};
use crate::config::OpenAiConfig;
use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// OpenAI provider holding the credential captured at startup.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url, path)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured(
                "OpenAI API key not configured".to_string(),
            ));
        }

        tracing::debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            parts = request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            json_mode = request.response_format.is_some(),
            "Sending request to chat completions API"
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            let message = error_message_from_body(&body);
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited { message });
            }
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let completion: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            id = completion.get("id").and_then(|v| v.as_str()).unwrap_or("-"),
            "Chat completion received"
        );

        Ok(completion)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured(
                "OpenAI API key not configured".to_string(),
            ));
        }

        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(self.config.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError {
                status: response.status().as_u16(),
                message: "Health check failed".to_string(),
            })
        }
    }
}

/// OpenAI error envelope: `{"error": {"message": "...", ...}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ if body.trim().is_empty() => "status code (no body)".to_string(),
        _ => body.to_string(),
    }
}
