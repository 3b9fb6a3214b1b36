//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/very/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the issued code, whether newly allocated or reused —
/// submitting the same URL again returns the same code:
///
/// ```json
/// { "code": "1L9zO9O", "short_url": "http://localhost:8080/1L9zO9O" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed or oversized URL and
/// 500 Internal Server Error on persistence failures.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    payload.validate()?;

    let mapping = state.url_service.shorten(&payload.long_url).await?;

    let short_url = state
        .url_service
        .short_url(&state.base_url, &mapping.short_code);

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            code: mapping.short_code,
            short_url,
        }),
    ))
}
