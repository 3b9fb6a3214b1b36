//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Public base prepended to short codes in `/create` responses.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, base_url: String) -> Self {
        Self {
            url_service,
            base_url,
        }
    }
}
