#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use login_demo::application::services::{AuthService, SessionService};
use login_demo::domain::CredentialRecord;
use login_demo::routes::router;
use login_demo::state::AppState;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "password123";
pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state() -> AppState {
    let credentials = Arc::new(
        CredentialRecord::new(TEST_USERNAME, TEST_PASSWORD).expect("bcrypt hashing failed"),
    );

    AppState {
        auth_service: Arc::new(AuthService::new(credentials)),
        session_service: Arc::new(SessionService::new(TEST_SECRET.to_string())),
    }
}

pub fn create_test_app() -> Router {
    router(create_test_state())
}

/// Extracts the bare `name=value` pair from a `Set-Cookie` header value,
/// the way a browser would store it for the next request.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .expect("Set-Cookie value is never empty")
        .to_string()
}
