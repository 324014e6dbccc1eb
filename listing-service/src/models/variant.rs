//! Handler variant profiles.
//!
//! The two listing endpoints differ in image encoding, response-length cap,
//! structured-output mode and error detail.

/// How an entry of `images` becomes an `image_url` part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    /// The entry is already a URL and is forwarded verbatim.
    Url,
    /// The entry is raw base64 JPEG data, wrapped as a `data:` URI.
    Base64Jpeg,
}

impl ImageEncoding {
    pub fn encode(&self, image: &str) -> String {
        match self {
            ImageEncoding::Url => image.to_string(),
            ImageEncoding::Base64Jpeg => format!("data:image/jpeg;base64,{}", image),
        }
    }
}

/// Generic message returned when the underlying error is not echoed.
pub const GENERIC_ERROR_MESSAGE: &str = "There was an error processing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingVariant {
    /// `/generate-listing`: image URLs, free-form text, 1000 tokens.
    Listing,
    /// `/generate-listings`: base64 JPEG images, JSON output when images
    /// are present, 1500 tokens.
    Listings,
}

impl ListingVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ListingVariant::Listing => "generate-listing",
            ListingVariant::Listings => "generate-listings",
        }
    }

    pub fn image_encoding(&self) -> ImageEncoding {
        match self {
            ListingVariant::Listing => ImageEncoding::Url,
            ListingVariant::Listings => ImageEncoding::Base64Jpeg,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            ListingVariant::Listing => 1000,
            ListingVariant::Listings => 1500,
        }
    }

    /// Whether a JSON object response is requested for image requests.
    /// Text-only requests are never forced into JSON mode.
    pub fn structured_output_with_images(&self) -> bool {
        matches!(self, ListingVariant::Listings)
    }

    /// Whether the error envelope carries the underlying error message.
    pub fn exposes_error_detail(&self) -> bool {
        matches!(self, ListingVariant::Listings)
    }

    pub fn error_message(&self, err: &dyn std::error::Error) -> String {
        if !self.exposes_error_detail() {
            return GENERIC_ERROR_MESSAGE.to_string();
        }

        let message = err.to_string();
        if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
