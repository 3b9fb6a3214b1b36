//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code was never issued and
/// 400 Bad Request if it contains symbols outside the base-62 alphabet.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.url_service.resolve(&code).await?;

    debug!(short_code = %code, long_url = %mapping.long_url, "Redirecting");

    Ok(Redirect::permanent(&mapping.long_url))
}
