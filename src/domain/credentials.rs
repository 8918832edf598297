//! The static credential record backing the demo account.

use anyhow::{Context, Result};

/// The single account against which login attempts are checked.
///
/// Built once at startup from configuration and shared with handlers behind
/// an `Arc`. The password is stored only as a salted bcrypt hash; the
/// plaintext is dropped as soon as the record is constructed.
pub struct CredentialRecord {
    username: String,
    password_hash: String,
}

impl CredentialRecord {
    /// Creates a record by hashing the plaintext password with bcrypt.
    ///
    /// # Errors
    ///
    /// Returns an error if bcrypt hashing fails.
    pub fn new(username: &str, password: &str) -> Result<Self> {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).context("Failed to hash password")?;

        Ok(Self {
            username: username.to_string(),
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks a plaintext password against the stored hash.
    ///
    /// A hash-parse failure counts as a mismatch rather than an error; the
    /// caller only ever learns "matched" or "did not match".
    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password_hash).unwrap_or(false)
    }
}
