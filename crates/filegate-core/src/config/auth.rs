//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256). When empty, a
    /// random per-process secret is generated at startup, which invalidates
    /// outstanding sessions on restart.
    #[serde(default)]
    pub secret: String,
    /// Session token lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: i64,
    /// Disable authentication entirely: every request runs as the template
    /// user and no cryptographic checks are performed.
    #[serde(default)]
    pub no_auth: bool,
    /// Minimum password length enforced when provisioning accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            session_ttl_hours: default_session_ttl(),
            no_auth: false,
            password_min_length: default_password_min(),
        }
    }
}

fn default_session_ttl() -> i64 {
    24
}

fn default_password_min() -> usize {
    8
}
