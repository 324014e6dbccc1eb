//! Chat-completion request types in the provider's wire format.

use serde::Serialize;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// One unit of a multimodal message.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

/// Structured-output mode requested from the provider.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_provider_wire_format() {
        let request = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::user(vec![
                ContentPart::text("Describe this"),
                ContentPart::image_url("http://x/1.png"),
            ])],
            max_tokens: 1500,
            response_format: Some(ResponseFormat::JsonObject),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "Describe this" },
                        { "type": "image_url", "image_url": { "url": "http://x/1.png" } }
                    ]
                }],
                "max_tokens": 1500,
                "response_format": { "type": "json_object" }
            })
        );
    }

    #[test]
    fn response_format_omitted_when_unset() {
        let request = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::user(vec![ContentPart::text("hi")])],
            max_tokens: 1000,
            response_format: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("response_format").is_none());
    }
}
