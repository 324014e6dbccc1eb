//! Chat-completion provider abstractions and implementations.
//!
//! Handlers talk to a `CompletionProvider` trait object so the upstream
//! API can be swapped (OpenAI, mock) without touching request shaping.

pub mod mock;
pub mod openai;

use crate::models::ChatCompletionRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("{status} {message}")]
    ApiError { status: u16, message: String },

    #[error("429 {message}")]
    RateLimited { message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Trait for chat-completion providers (e.g., OpenAI).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one completion request and return the provider's response
    /// object untouched.
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
