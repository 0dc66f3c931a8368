//! Password policy enforcement for newly provisioned accounts.
//!
//! Applied when an operator provisions a plaintext password (config load or
//! the CLI `hash` command), never on the login path.

use filegate_core::config::auth::AuthConfig;
use filegate_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("ab1!").is_err());
    }

    #[test]
    fn test_low_entropy_rejected() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("password").is_err());
    }

    #[test]
    fn test_strong_password_accepted() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("korrekt hest batteri stift 42").is_ok());
    }
}
