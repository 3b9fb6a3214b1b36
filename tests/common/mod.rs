#![allow(dead_code)]

use std::sync::Arc;

use tiny_url::application::services::UrlService;
use tiny_url::application::services::url_service::COUNTER_SEED;
use tiny_url::infrastructure::persistence::MemoryMappingRepository;
use tiny_url::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080/";

/// Builds handler state over a fresh in-memory repository.
pub fn create_test_state() -> AppState {
    create_test_state_with_repository(Arc::new(MemoryMappingRepository::new()))
}

/// Builds handler state over a caller-held repository, so tests can inspect
/// the store behind the handlers.
pub fn create_test_state_with_repository(repository: Arc<MemoryMappingRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(repository, COUNTER_SEED));
    AppState::new(url_service, BASE_URL.to_string())
}
