use std::sync::Arc;

use crate::application::services::{AuthService, SessionService};

/// Shared application state injected into every handler.
///
/// Both services are immutable after startup, so the state is freely
/// cloneable and safe for unlimited concurrent reads.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
}
