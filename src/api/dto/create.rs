//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 400, message = "URL must be at most 400 characters"))]
    pub long_url: String,
}

/// Response carrying the issued (or reused) short code.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub code: String,
    pub short_url: String,
}
