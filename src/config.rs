//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_SECRET` - Session cookie signing secret. When unset, a random
//!   secret is generated at startup and every session is invalidated by a
//!   process restart.
//! - `LOGIN_USERNAME` - Username of the demo account (default: `admin`)
//! - `LOGIN_PASSWORD` - Password of the demo account (default: `password123`)

use anyhow::Result;
use std::env;

/// Default demo account.
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password123";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Session signing secret. `None` means "generate a random one at
    /// startup", which makes sessions die with the process.
    pub session_secret: Option<String>,
    /// Username of the single demo account.
    pub username: String,
    /// Plaintext password of the demo account; hashed once at startup and
    /// never stored beyond that.
    pub password: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let session_secret = env::var("SESSION_SECRET").ok();

        let username = env::var("LOGIN_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());
        let password = env::var("LOGIN_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
            session_secret,
            username,
            password,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `SESSION_SECRET` is set but empty
    /// - the account username or password is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref secret) = self.session_secret
            && secret.is_empty()
        {
            anyhow::bail!("SESSION_SECRET must not be empty when set");
        }

        if self.username.trim().is_empty() {
            anyhow::bail!("LOGIN_USERNAME must not be empty");
        }

        if self.password.is_empty() {
            anyhow::bail!("LOGIN_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Account: {}", self.username);

        if self.session_secret.is_some() {
            tracing::info!("  Session secret: set (sessions survive restarts)");
        } else {
            tracing::info!("  Session secret: generated per process");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
