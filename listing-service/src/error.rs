use crate::services::ProviderError;
use thiserror::Error;

/// Failures while serving a listing request.
///
/// Every variant surfaces as HTTP 500; the variants exist for logging.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to encode provider response: {0}")]
    Encode(serde_json::Error),
}
