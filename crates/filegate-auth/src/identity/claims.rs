//! Identity token claims and scope projection.

use serde_json::Value;

use filegate_core::error::AppError;
use filegate_entity::user::User;

/// Scope prefix carrying an email override.
const EMAIL_PREFIX: &str = "[user:email]:";
/// Scope prefix carrying a real-name override. Also the shortest recognized
/// prefix; shorter scope entries cannot carry an override and are skipped.
const NAME_PREFIX: &str = "[user:name]:";

/// Claims extracted from a validated identity token.
///
/// Built field-by-field from the decoded payload rather than deserialized
/// wholesale: a missing or wrong-shaped claim is a rejection, never a
/// panic, and the distinction from a signature failure stays internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Username asserted by the identity provider.
    pub username: String,
    /// Ordered scope entries, each an opaque string possibly carrying a
    /// recognized attribute prefix.
    pub scope: Vec<String>,
}

impl IdentityClaims {
    /// Extracts the required claims from a decoded token payload.
    pub fn from_payload(payload: &Value) -> Result<Self, AppError> {
        let username = payload
            .get("username")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::forbidden("identity token missing username claim"))?;

        let scope = payload
            .get("scope")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::forbidden("identity token missing scope claim"))?
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::forbidden("identity token scope entry is not a string"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            username: username.to_string(),
            scope,
        })
    }

    /// Derives a transient user for this request from the template user.
    ///
    /// The template's permissions are kept, recognized scope prefixes
    /// override email and real name in order, the username comes from the
    /// claim, and admin privileges are revoked unconditionally — an
    /// externally issued identity is never elevated by this core.
    pub fn project_onto(&self, template: &User) -> User {
        let mut user = template.sanitized();

        for scope in &self.scope {
            if scope.len() < NAME_PREFIX.len() {
                continue;
            }

            if let Some(email) = scope.strip_prefix(EMAIL_PREFIX) {
                user.email = Some(email.to_string());
            }

            if let Some(name) = scope.strip_prefix(NAME_PREFIX) {
                user.real_name = name.to_string();
            }
        }

        user.username = self.username.clone();
        user.admin = false;
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> User {
        User {
            username: "admin".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            admin: true,
            real_name: "Administrator".to_string(),
            email: Some("admin@example.com".to_string()),
            locale: "en".to_string(),
            allow_commands: true,
            allow_edit: true,
            allow_new: true,
            allow_publish: true,
            commands: vec!["git".to_string()],
            rules: Vec::new(),
        }
    }

    #[test]
    fn test_from_payload_requires_username() {
        let err = IdentityClaims::from_payload(&json!({"scope": []})).unwrap_err();
        assert_eq!(err.kind, filegate_core::error::ErrorKind::Forbidden);
    }

    #[test]
    fn test_from_payload_requires_scope_list_of_strings() {
        assert!(IdentityClaims::from_payload(&json!({"username": "ann"})).is_err());
        assert!(
            IdentityClaims::from_payload(&json!({"username": "ann", "scope": "user:admin"}))
                .is_err()
        );
        assert!(
            IdentityClaims::from_payload(&json!({"username": "ann", "scope": [42]})).is_err()
        );
    }

    #[test]
    fn test_projection_applies_recognized_prefixes() {
        let claims = IdentityClaims {
            username: "ann".to_string(),
            scope: vec![
                "[user:email]:a@b.com".to_string(),
                "[user:name]:Ann".to_string(),
            ],
        };

        let user = claims.project_onto(&template());
        assert_eq!(user.username, "ann");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.real_name, "Ann");
        assert!(user.password_hash.is_empty());
    }

    #[test]
    fn test_projection_never_grants_admin() {
        let claims = IdentityClaims {
            username: "ann".to_string(),
            scope: vec!["[user:admin]:true".to_string()],
        };

        let user = claims.project_onto(&template());
        assert!(!user.admin);
    }

    #[test]
    fn test_projection_keeps_template_permissions() {
        let claims = IdentityClaims {
            username: "ann".to_string(),
            scope: Vec::new(),
        };

        let user = claims.project_onto(&template());
        assert!(user.allow_edit);
        assert_eq!(user.commands, vec!["git".to_string()]);
        assert_eq!(user.locale, "en");
    }

    #[test]
    fn test_short_scope_entries_ignored() {
        let claims = IdentityClaims {
            username: "ann".to_string(),
            scope: vec!["x".to_string(), "user:memberof".to_string()],
        };

        let user = claims.project_onto(&template());
        assert_eq!(user.email.as_deref(), Some("admin@example.com"));
        assert_eq!(user.real_name, "Administrator");
    }

    #[test]
    fn test_later_scope_entries_override_earlier() {
        let claims = IdentityClaims {
            username: "ann".to_string(),
            scope: vec![
                "[user:email]:first@b.com".to_string(),
                "[user:email]:second@b.com".to_string(),
            ],
        };

        let user = claims.project_onto(&template());
        assert_eq!(user.email.as_deref(), Some("second@b.com"));
    }
}
