//! DTOs for the logout endpoint.

use serde::Serialize;

/// Logout confirmation response.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
