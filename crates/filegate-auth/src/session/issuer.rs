//! Session token creation with configurable signing secret and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use rand::Rng;

use filegate_core::config::auth::AuthConfig;
use filegate_core::error::AppError;
use filegate_entity::user::User;

use super::SERVICE_ISSUER;
use super::claims::SessionClaims;

/// Creates signed session tokens for authenticated users.
#[derive(Clone)]
pub struct SessionIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session TTL in hours.
    session_ttl_hours: i64,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}

impl SessionIssuer {
    /// Creates a new issuer from the resolved installation secret.
    pub fn new(secret: &[u8], config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            session_ttl_hours: config.session_ttl_hours,
        }
    }

    /// Signs a session token for the given user.
    ///
    /// The embedded snapshot is sanitized, the expiry is issuance time plus
    /// the configured TTL, and the issuer claim is fixed. A signing failure
    /// is the caller's only internal (5xx-class) error on the auth path.
    pub fn issue(&self, user: &User, no_auth: bool) -> Result<String, AppError> {
        let exp = Utc::now() + chrono::Duration::hours(self.session_ttl_hours);

        let claims = SessionClaims {
            user: user.sanitized(),
            no_auth,
            exp: exp.timestamp(),
            iss: SERVICE_ISSUER.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))
    }
}

/// Resolves the installation signing secret from configuration, generating
/// a random per-process secret when none is configured. A generated secret
/// invalidates all outstanding sessions on restart.
pub fn resolve_secret(config: &AuthConfig) -> Vec<u8> {
    if !config.secret.is_empty() {
        return config.secret.as_bytes().to_vec();
    }

    tracing::warn!("No signing secret configured; generating a random per-process secret");
    let mut secret = vec![0u8; 64];
    rand::rng().fill_bytes(&mut secret);
    secret
}
