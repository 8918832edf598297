//! HTTP server initialization and runtime setup.
//!
//! Builds the credential record and session signer from configuration,
//! then runs the Axum server.

use crate::application::services::{AuthService, SessionService};
use crate::config::Config;
use crate::domain::CredentialRecord;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The credential record (password hashed once, plaintext dropped)
/// - The session signing secret (configured or randomly generated)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Password hashing fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let credentials = Arc::new(CredentialRecord::new(&config.username, &config.password)?);
    tracing::info!("Credential record ready for '{}'", config.username);

    let signing_secret = match config.session_secret {
        Some(secret) => secret,
        None => {
            tracing::warn!(
                "SESSION_SECRET not set; using a random secret, sessions will not survive a restart"
            );
            random_secret()
        }
    };

    let state = AppState {
        auth_service: Arc::new(AuthService::new(credentials)),
        session_service: Arc::new(SessionService::new(signing_secret)),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Generates a fresh 32-byte signing secret, base64url-encoded.
fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_is_unique_and_long_enough() {
        let a = random_secret();
        let b = random_secret();

        assert_ne!(a, b);
        // 32 bytes of entropy encode to 43 unpadded base64 characters.
        assert_eq!(a.len(), 43);
    }
}
