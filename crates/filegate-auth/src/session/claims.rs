//! Session token claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filegate_entity::user::User;

/// Claims payload embedded in every session token.
///
/// The user snapshot is flattened into the top-level claims object, so the
/// wire shape is the user's camelCase fields plus `noAuth`, `exp`, and
/// `iss`. Invariant: the embedded user is sanitized — a password hash never
/// leaves the server inside a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Snapshot of the user at issuance time, password hash cleared.
    #[serde(flatten)]
    pub user: User,
    /// Whether the installation runs without authentication.
    #[serde(rename = "noAuth")]
    pub no_auth: bool,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issuing service name.
    pub iss: String,
}

impl SessionClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
