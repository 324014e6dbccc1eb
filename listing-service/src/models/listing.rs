use serde::Deserialize;

/// Body accepted by the listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRequest {
    /// Free-form instruction forwarded verbatim as the text part.
    pub prompt: String,

    /// Ordered image payloads: URLs or raw base64, depending on variant.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl ListingRequest {
    /// Images in input order; empty when the field was absent or null.
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn has_images(&self) -> bool {
        !self.images().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_field_is_optional() {
        let req: ListingRequest = serde_json::from_str(r#"{"prompt":"Describe this"}"#).unwrap();
        assert_eq!(req.prompt, "Describe this");
        assert!(!req.has_images());
    }

    #[test]
    fn null_images_treated_as_absent() {
        let req: ListingRequest =
            serde_json::from_str(r#"{"prompt":"p","images":null}"#).unwrap();
        assert!(req.images().is_empty());
    }

    #[test]
    fn missing_prompt_fails_to_parse() {
        let result = serde_json::from_str::<ListingRequest>(r#"{"images":["a"]}"#);
        assert!(result.is_err());
    }
}
