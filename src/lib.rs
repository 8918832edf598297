//! # Login Demo
//!
//! A minimal single-page login demonstration service built with Axum.
//!
//! One hard-coded account, a signed session cookie set on successful
//! authentication, and a single HTML page whose visible panel (login form
//! or welcome view) is chosen server-side from session state. The page's
//! inline script toggles panels on login/logout without a full reload.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The immutable credential record
//! - **Application Layer** ([`application`]) - Credential checks and session signing
//! - **API Layer** ([`api`]) - JSON handlers and DTOs for `/login` and `/logout`
//! - **Web Layer** ([`web`]) - Askama-rendered single page for `/`
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: fix the session secret so sessions survive restarts
//! export SESSION_SECRET="change-me"
//!
//! # Start the service (defaults to admin / password123 on 0.0.0.0:3000)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, SESSION_COOKIE, SessionService};
    pub use crate::domain::CredentialRecord;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
