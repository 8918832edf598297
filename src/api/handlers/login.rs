//! Handler for the login endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates a username/password pair and issues the session cookie.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "password123" }
/// ```
///
/// # Response
///
/// `200 OK` with a `Set-Cookie` header carrying the signed session token:
///
/// ```json
/// { "message": "Logged in", "username": "admin" }
/// ```
///
/// # Errors
///
/// - `400` - body is not JSON, or either field is empty (username is
///   trimmed first)
/// - `401` - username or password is wrong; the two cases return the
///   identical message on purpose
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("rejected login body: {rejection}");
        AppError::bad_request("Invalid request body, JSON expected.")
    })?;

    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request("Username and password are required."));
    }

    let username = state.auth_service.login(username, &payload.password).await?;
    tracing::info!(%username, "login succeeded");

    let cookie = state.session_service.login_cookie(&username);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            message: "Logged in".to_string(),
            username,
        }),
    ))
}
