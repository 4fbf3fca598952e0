//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b?q=1" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://127.0.0.1:8080/Xy3abQ" }
/// ```
///
/// Shortening the same URL again returns the same short URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or the URL is malformed.
/// Returns 500 Internal Server Error if no unique code could be allocated or
/// the store failed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let code = state.shortener.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&code),
    }))
}
