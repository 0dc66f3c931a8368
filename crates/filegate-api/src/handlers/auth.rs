//! Auth handlers — login, renew, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use filegate_auth::gateway::Credentials;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, BearerToken};
use crate::state::AppState;

/// POST /api/auth/login
///
/// Returns the issued session token as the response body. An absent or
/// undecodable body is handed to the gateway as missing credentials so the
/// rejection is indistinguishable from a bad password.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    let credentials = payload
        .ok()
        .map(|Json(req)| req)
        .filter(|req| req.validate().is_ok())
        .map(|req| Credentials {
            username: req.username,
            password: req.password,
        });

    Ok(state.gateway.login(credentials).await?)
}

/// POST /api/auth/renew
///
/// Resolves the caller's current identity and returns a fresh session
/// token as the response body.
pub async fn renew(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<String, ApiError> {
    Ok(state.gateway.renew(token.as_deref()).await?)
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse::from(auth.0)))
}
