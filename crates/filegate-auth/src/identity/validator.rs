//! Identity token signature verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use filegate_core::error::AppError;

use super::IDENTITY_PROVIDER_PUBLIC_KEY;
use super::claims::IdentityClaims;

/// Verifies externally issued identity tokens against the provider's
/// public key.
///
/// Constructed once at startup and shared read-only across request tasks.
#[derive(Clone)]
pub struct IdentityVerifier {
    /// Provider public key.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for IdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl IdentityVerifier {
    /// Creates a verifier from a PEM-encoded EC public key.
    ///
    /// Fails with a configuration error when the key does not parse; at
    /// startup that failure is fatal.
    pub fn from_pem(pem: &[u8]) -> Result<Self, AppError> {
        let decoding_key = DecodingKey::from_ec_pem(pem).map_err(|e| {
            AppError::configuration(format!("Failed to parse identity provider public key: {e}"))
        })?;

        let mut validation = Validation::new(Algorithm::ES384);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Creates a verifier for the compiled-in identity provider key.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_pem(IDENTITY_PROVIDER_PUBLIC_KEY.as_bytes())
    }

    /// Verifies a token and extracts its identity claims.
    ///
    /// Signature, algorithm, structure, and expiry are checked before any
    /// claim is looked at. Every failure maps to the same outward
    /// rejection; the specific reason is only logged.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AppError> {
        let data = decode::<serde_json::Value>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "identity token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::forbidden("identity token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::forbidden("identity token signature mismatch")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                        AppError::forbidden("identity token asserts an unexpected algorithm")
                    }
                    _ => AppError::forbidden(format!("identity token rejected: {e}")),
                }
            })?;

        IdentityClaims::from_payload(&data.claims)
    }
}
