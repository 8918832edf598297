//! Single-page handler: login form or welcome panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::state::AppState;

/// Template for the single page.
///
/// Renders `templates/index.html` with the panel visibility decided
/// server-side; the embedded script then toggles panels on login/logout
/// without a full reload.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    logged_in: bool,
    username: String,
}

/// Renders the page in either the anonymous or the authenticated view.
///
/// # Endpoint
///
/// `GET /`
///
/// # Session Handling
///
/// The `session` cookie is verified against the signing secret and the
/// embedded username must still match the configured account. Any missing,
/// tampered, or stale cookie falls back to the anonymous view; this
/// handler never fails.
pub async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let user = state
        .session_service
        .authenticated_user(&headers)
        .filter(|name| name == state.auth_service.username());

    IndexTemplate {
        logged_in: user.is_some(),
        username: user.unwrap_or_default(),
    }
}
