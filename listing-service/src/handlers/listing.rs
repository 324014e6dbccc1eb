//! Listing generation handlers.
//!
//! Each handler accepts any method so that non-POST requests get the
//! plain `405 Method Not Allowed` body with no headers, rather than the
//! router's own rejection.

use crate::error::ListingError;
use crate::models::{ListingRequest, ListingVariant};
use crate::services::build_chat_request;
use crate::startup::AppState;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::Response,
};
use serde_json::json;

/// `/generate-listing`: image URLs, free-form answer.
pub async fn generate_listing(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    handle(&state, ListingVariant::Listing, method, &body).await
}

/// `/generate-listings`: base64 JPEG images, JSON answer when images are sent.
pub async fn generate_listings(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    handle(&state, ListingVariant::Listings, method, &body).await
}

async fn handle(
    state: &AppState,
    variant: ListingVariant,
    method: Method,
    body: &[u8],
) -> Response {
    if method != Method::POST {
        return method_not_allowed();
    }

    match generate(state, variant, body).await {
        Ok(payload) => json_response(StatusCode::OK, payload),
        Err(err) => {
            tracing::error!(variant = variant.name(), error = %err, "Listing generation failed");
            let payload = serde_json::to_vec(&json!({ "error": variant.error_message(&err) }))
                .unwrap_or_default();
            json_response(StatusCode::INTERNAL_SERVER_ERROR, payload)
        }
    }
}

async fn generate(
    state: &AppState,
    variant: ListingVariant,
    body: &[u8],
) -> Result<Vec<u8>, ListingError> {
    let request: ListingRequest = serde_json::from_slice(body)?;
    let chat_request = build_chat_request(variant, &state.model, &request);

    let completion = state.provider.create_chat_completion(&chat_request).await?;

    tracing::info!(
        variant = variant.name(),
        images = request.images().len(),
        "Listing generated"
    );

    serde_json::to_vec(&completion).map_err(ListingError::Encode)
}

fn method_not_allowed() -> Response {
    let mut response = Response::new(Body::from("Method Not Allowed"));
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
}

fn json_response(status: StatusCode, payload: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
