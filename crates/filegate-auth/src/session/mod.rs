//! Locally issued session tokens.
//!
//! A session token is a compact, HMAC-SHA256-signed claims structure
//! embedding a sanitized snapshot of the user it was issued to. The server
//! never re-verifies its own session tokens; per-request authentication
//! goes through the identity token path (see [`crate::identity`]).

pub mod claims;
pub mod issuer;

pub use claims::SessionClaims;
pub use issuer::SessionIssuer;

/// Issuer name embedded in every session token.
pub const SERVICE_ISSUER: &str = "FileGate";
