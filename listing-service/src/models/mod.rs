//! Domain models for the listing service.

pub mod chat;
pub mod listing;
pub mod variant;

pub use chat::{ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, ResponseFormat};
pub use listing::ListingRequest;
pub use variant::{ImageEncoding, ListingVariant, GENERIC_ERROR_MESSAGE};
