//! Authentication service for login credential checks.

use std::sync::Arc;

use crate::domain::CredentialRecord;
use crate::error::AppError;

/// Service that validates submitted credentials against the configured
/// account.
///
/// An unknown username and a wrong password produce the same error, so a
/// caller cannot probe which half of the pair was wrong.
pub struct AuthService {
    credentials: Arc<CredentialRecord>,
}

impl AuthService {
    pub fn new(credentials: Arc<CredentialRecord>) -> Self {
        Self { credentials }
    }

    /// The username of the configured account.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Checks a username/password pair against the credential record.
    ///
    /// bcrypt verification runs on a blocking thread so it does not stall
    /// the async runtime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with a generic message when the
    /// username does not match or the password fails verification.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let credentials = Arc::clone(&self.credentials);
        let submitted_user = username.to_string();
        let submitted_pass = password.to_string();

        let matched = tokio::task::spawn_blocking(move || {
            submitted_user == credentials.username() && credentials.verify_password(&submitted_pass)
        })
        .await
        .map_err(|_| AppError::internal("Credential check failed."))?;

        if !matched {
            return Err(AppError::unauthorized("Invalid credentials."));
        }

        Ok(username.to_string())
    }
}
