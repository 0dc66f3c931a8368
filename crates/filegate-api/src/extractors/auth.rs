//! `AuthUser` extractor — locates the bearer credential, resolves the
//! request identity through the gateway, and injects it into handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filegate_entity::user::User;

use crate::error::ApiError;
use crate::extractors::token::extract_token;
use crate::state::AppState;

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers);
        let user = state.gateway.authenticate(token.as_deref()).await?;
        Ok(AuthUser(user))
    }
}
