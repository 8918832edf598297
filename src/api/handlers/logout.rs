//! Handler for the logout endpoint.

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};

use crate::api::dto::logout::LogoutResponse;
use crate::state::AppState;

/// Clears the session cookie, logging the client out.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Idempotent: succeeds with `200 OK` whether or not a session exists. The
/// response carries a `Set-Cookie` header expiring the cookie immediately.
///
/// # Response
///
/// ```json
/// { "message": "Logged out" }
/// ```
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, state.session_service.logout_cookie())]),
        Json(LogoutResponse {
            message: "Logged out".to_string(),
        }),
    )
}
