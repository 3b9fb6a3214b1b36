//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`  - Shorten a long URL
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /ping`    - Liveness probe
//! - `GET  /health`  - Component health check
//!
//! Static segments (`/create`, `/ping`, `/health`) take precedence over the
//! `/{code}` capture; issued codes are always 7 base-62 characters, so they
//! can never shadow a reserved path.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_handler, health_handler, ping_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/create", post(create_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
