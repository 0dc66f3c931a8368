//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use filegate_auth::gateway::AuthGateway;
use filegate_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authentication gateway — the sole entry point for credential
    /// verification and identity resolution.
    pub gateway: Arc<AuthGateway>,
}
