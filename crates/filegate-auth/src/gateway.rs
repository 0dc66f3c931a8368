//! Per-request authentication orchestration.

use std::sync::Arc;

use filegate_core::error::AppError;
use filegate_core::traits::UserStore;
use filegate_entity::user::User;

use crate::identity::IdentityVerifier;
use crate::password::PasswordHasher;
use crate::session::SessionIssuer;

/// Login credentials decoded from a request body.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Claimed username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// The single entry point the HTTP layer consults for authentication.
///
/// Dispatches three flows: credential login, session renewal, and
/// per-request identity resolution. No state persists across requests;
/// every field is fixed at construction and read concurrently.
#[derive(Clone)]
pub struct AuthGateway {
    /// Local account lookup for the login flow.
    store: Arc<dyn UserStore<User>>,
    /// Password verification for the login flow.
    hasher: PasswordHasher,
    /// Session token minting.
    issuer: SessionIssuer,
    /// Identity token verification.
    verifier: IdentityVerifier,
    /// Whether the installation runs without authentication.
    no_auth: bool,
    /// Identity used in no-auth mode and as the projection base for
    /// externally validated identities.
    template_user: User,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("no_auth", &self.no_auth)
            .field("template_user", &self.template_user.username)
            .finish()
    }
}

impl AuthGateway {
    /// Creates a gateway from its collaborators.
    pub fn new(
        store: Arc<dyn UserStore<User>>,
        hasher: PasswordHasher,
        issuer: SessionIssuer,
        verifier: IdentityVerifier,
        no_auth: bool,
        template_user: User,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            verifier,
            no_auth,
            template_user,
        }
    }

    /// Authenticates submitted credentials and mints a session token.
    ///
    /// An absent body, an unknown username, and a password mismatch are
    /// deliberately indistinguishable to the caller. In no-auth mode the
    /// template user is issued a token without any credential check.
    pub async fn login(&self, credentials: Option<Credentials>) -> Result<String, AppError> {
        if self.no_auth {
            return self.issuer.issue(&self.template_user, true);
        }

        let credentials = credentials
            .ok_or_else(|| AppError::forbidden("login request without a decodable body"))?;

        let user = self
            .store
            .lookup(&credentials.username)
            .await?
            .filter(|user| self.hasher.verify(&credentials.password, &user.password_hash))
            .ok_or_else(|| AppError::forbidden("invalid credentials"))?;

        tracing::info!(username = %user.username, "login accepted");
        self.issuer.issue(&user, false)
    }

    /// Resolves the caller's current identity and mints a fresh session
    /// token for it.
    ///
    /// Resolution goes through the identity-token path (or the no-auth
    /// passthrough) — a previously self-issued session token is not a
    /// renewal credential.
    pub async fn renew(&self, token: Option<&str>) -> Result<String, AppError> {
        let user = self.authenticate(token).await?;
        self.issuer.issue(&user, self.no_auth)
    }

    /// Resolves the identity for one protected request.
    ///
    /// In no-auth mode every request runs as the template user and no token
    /// is parsed. Otherwise the bearer credential must be a valid identity
    /// token, whose claims are projected onto the template user.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<User, AppError> {
        if self.no_auth {
            return Ok(self.template_user.sanitized());
        }

        let token =
            token.ok_or_else(|| AppError::forbidden("request without a bearer credential"))?;

        let claims = self.verifier.verify(token)?;
        let user = claims.project_onto(&self.template_user);
        tracing::debug!(username = %user.username, "identity token accepted");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::Utc;
    use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
    use serde_json::json;

    use filegate_core::config::auth::AuthConfig;
    use filegate_core::result::AppResult;

    use crate::session::SessionClaims;
    use crate::testkeys::{PROVIDER_PRIVATE_KEY, PROVIDER_PUBLIC_KEY};

    const SECRET: &[u8] = b"gateway-test-secret";

    struct StubStore(HashMap<String, User>);

    #[async_trait]
    impl UserStore<User> for StubStore {
        async fn lookup(&self, username: &str) -> AppResult<Option<User>> {
            Ok(self.0.get(username).cloned())
        }
    }

    fn user(username: &str, password_hash: &str, admin: bool) -> User {
        User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            admin,
            real_name: String::new(),
            email: None,
            locale: "en".to_string(),
            allow_commands: true,
            allow_edit: true,
            allow_new: true,
            allow_publish: true,
            commands: vec!["git".to_string()],
            rules: Vec::new(),
        }
    }

    fn gateway(no_auth: bool) -> AuthGateway {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("open sesame").unwrap();

        let mut users = HashMap::new();
        users.insert("ann".to_string(), user("ann", &hash, false));

        AuthGateway::new(
            Arc::new(StubStore(users)),
            hasher,
            SessionIssuer::new(SECRET, &AuthConfig::default()),
            IdentityVerifier::from_pem(PROVIDER_PUBLIC_KEY.as_bytes()).unwrap(),
            no_auth,
            user("admin", "template-hash", true),
        )
    }

    fn decode_session(token: &str) -> SessionClaims {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap()
        .claims
    }

    fn identity_token(username: &str, scope: &[&str]) -> String {
        encode(
            &Header::new(Algorithm::ES384),
            &json!({
                "username": username,
                "scope": scope,
                "exp": Utc::now().timestamp() + 600,
            }),
            &EncodingKey::from_ec_pem(PROVIDER_PRIVATE_KEY.as_bytes()).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_mints_token_for_stored_user() {
        let claims = decode_session(
            &gateway(false)
                .login(Some(Credentials {
                    username: "ann".to_string(),
                    password: "open sesame".to_string(),
                }))
                .await
                .unwrap(),
        );

        assert_eq!(claims.user.username, "ann");
        assert!(claims.user.password_hash.is_empty());
        assert!(!claims.no_auth);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let gw = gateway(false);

        let missing_body = gw.login(None).await.unwrap_err();
        let unknown_user = gw
            .login(Some(Credentials {
                username: "mallory".to_string(),
                password: "open sesame".to_string(),
            }))
            .await
            .unwrap_err();
        let wrong_password = gw
            .login(Some(Credentials {
                username: "ann".to_string(),
                password: "closed sesame".to_string(),
            }))
            .await
            .unwrap_err();

        for err in [missing_body, unknown_user, wrong_password] {
            assert_eq!(err.kind, filegate_core::error::ErrorKind::Forbidden);
        }
    }

    #[tokio::test]
    async fn test_no_auth_authenticate_skips_token_parsing() {
        let gw = gateway(true);

        let user = gw.authenticate(None).await.unwrap();
        assert_eq!(user.username, "admin");

        let user = gw.authenticate(Some("definitely-not-a-token")).await.unwrap();
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_authenticate_projects_identity_claims() {
        let token = identity_token("ann", &["[user:email]:a@b.com", "[user:name]:Ann"]);

        let user = gateway(false).authenticate(Some(&token)).await.unwrap();
        assert_eq!(user.username, "ann");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.real_name, "Ann");
        assert!(!user.admin);
    }

    #[tokio::test]
    async fn test_authenticate_without_token_rejected() {
        assert!(gateway(false).authenticate(None).await.is_err());
    }

    #[tokio::test]
    async fn test_renew_resolves_identity_then_mints() {
        let token = identity_token("ann", &[]);

        let claims = decode_session(&gateway(false).renew(Some(&token)).await.unwrap());
        assert_eq!(claims.user.username, "ann");
        assert!(!claims.user.admin);
    }

    #[tokio::test]
    async fn test_renew_rejects_session_token() {
        let gw = gateway(false);
        let session = gw
            .login(Some(Credentials {
                username: "ann".to_string(),
                password: "open sesame".to_string(),
            }))
            .await
            .unwrap();

        assert!(gw.renew(Some(&session)).await.is_err());
    }
}
