//! Shared application state injected into Axum handlers.

use crate::config::ServerConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Mark session cookies `Secure` (HTTPS deployments).
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self { cookie_secure: config.cookie_secure }
    }
}
