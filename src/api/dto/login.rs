//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};

/// Login request body.
///
/// Absent fields deserialize to empty strings and are rejected by the
/// handler's emptiness check, so `{}` and `{"username": ""}` fail the same
/// way.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    /// The authenticated username, echoed back for the client script.
    pub username: String,
}
