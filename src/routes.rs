//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Single page: login form or welcome panel
//! - `POST /login`   - Authenticate, set session cookie
//! - `POST /logout`  - Clear session cookie
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{login_handler, logout_handler};
use crate::state::AppState;
use crate::web::handlers::index_handler;

/// Builds the bare router without outer middleware.
///
/// Used directly by integration tests; [`app_router`] wraps it for the
/// server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
