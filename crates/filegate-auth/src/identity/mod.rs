//! Externally issued identity tokens.
//!
//! The identity provider signs tokens with ES384; this module verifies them
//! against the provider's public key and projects the embedded scope claims
//! onto the internal user model. Identity tokens and locally issued session
//! tokens share a wire shape but are never interchangeable: only the
//! [`IdentityVerifier`] resolves per-request identity.

pub mod claims;
pub mod validator;

pub use claims::IdentityClaims;
pub use validator::IdentityVerifier;

/// Public key of the trusted identity provider, fixed per build.
///
/// Parsed exactly once during startup wiring; a parse failure aborts the
/// process. There is no key-rotation path.
pub const IDENTITY_PROVIDER_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----
MHYwEAYHKoZIzj0CAQYFK4EEACIDYgAES5X8XrfKdx9gYayFITc89wad4usrk0n2
7MjiGYvqalizeSWTHEpnd7oea9IQ8T5oJjMVH5cc0H5tFSKilFFeh//wngxIyny6
6+Vq5t5B0V0Ehy01+2ceEon2Y0XDkIKv
-----END PUBLIC KEY-----";
