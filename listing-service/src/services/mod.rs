pub mod payload;
pub mod providers;

pub use payload::build_chat_request;
pub use providers::{CompletionProvider, ProviderError};
