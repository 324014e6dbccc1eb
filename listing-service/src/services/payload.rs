//! Shapes a listing request into a single chat-completion request.

use crate::models::{
    ChatCompletionRequest, ChatMessage, ContentPart, ListingRequest, ListingVariant,
    ResponseFormat,
};

/// Build the outbound request for `variant`.
///
/// The message holds the prompt as its only text part, followed by one
/// image part per entry of `images` in input order.
pub fn build_chat_request(
    variant: ListingVariant,
    model: &str,
    request: &ListingRequest,
) -> ChatCompletionRequest {
    let encoding = variant.image_encoding();

    let mut content = Vec::with_capacity(1 + request.images().len());
    content.push(ContentPart::text(request.prompt.as_str()));
    content.extend(
        request
            .images()
            .iter()
            .map(|image| ContentPart::image_url(encoding.encode(image))),
    );

    let response_format = (variant.structured_output_with_images() && request.has_images())
        .then_some(ResponseFormat::JsonObject);

    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(content)],
        max_tokens: variant.max_tokens(),
        response_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str, images: Option<Vec<&str>>) -> ListingRequest {
        ListingRequest {
            prompt: prompt.to_string(),
            images: images.map(|i| i.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn text_only_request_has_single_text_part_and_no_json_mode() {
        for variant in [ListingVariant::Listing, ListingVariant::Listings] {
            let chat = build_chat_request(variant, "gpt-4o", &request("Describe this", None));

            assert_eq!(chat.messages.len(), 1);
            assert_eq!(chat.messages[0].role, "user");
            assert_eq!(
                chat.messages[0].content,
                vec![ContentPart::text("Describe this")]
            );
            assert_eq!(chat.response_format, None);
        }
    }

    #[test]
    fn empty_images_behave_like_text_only() {
        let chat = build_chat_request(
            ListingVariant::Listings,
            "gpt-4o",
            &request("Describe this", Some(vec![])),
        );
        assert_eq!(chat.messages[0].content.len(), 1);
        assert_eq!(chat.response_format, None);
    }

    #[test]
    fn listings_wraps_base64_and_requests_json() {
        let chat = build_chat_request(
            ListingVariant::Listings,
            "gpt-4o",
            &request("Describe this", Some(vec!["AAAA"])),
        );

        assert_eq!(
            chat.messages[0].content[1],
            ContentPart::image_url("data:image/jpeg;base64,AAAA")
        );
        assert_eq!(chat.response_format, Some(ResponseFormat::JsonObject));
        assert_eq!(chat.max_tokens, 1500);
    }

    #[test]
    fn listing_keeps_url_order_and_never_requests_json() {
        let chat = build_chat_request(
            ListingVariant::Listing,
            "gpt-4o",
            &request("Describe this", Some(vec!["http://x/1.png", "http://x/2.png"])),
        );

        assert_eq!(
            chat.messages[0].content,
            vec![
                ContentPart::text("Describe this"),
                ContentPart::image_url("http://x/1.png"),
                ContentPart::image_url("http://x/2.png"),
            ]
        );
        assert_eq!(chat.response_format, None);
        assert_eq!(chat.max_tokens, 1000);
        assert_eq!(chat.model, "gpt-4o");
    }
}
