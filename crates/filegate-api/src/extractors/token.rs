//! Bearer-token extraction policy.
//!
//! A credential can arrive in two transports, tried in a fixed order:
//!
//! 1. `Authorization` header, bearer scheme — accepted only when the value
//!    has the compact three-segment signed-token shape (exactly two `.`
//!    separators). This keeps URLs that historically carried basic-auth in
//!    the same header slot working.
//! 2. The `caddyauth` cookie.
//!
//! An absent token is not an error here; the gateway decides what absence
//! means for the flow at hand.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

/// Cookie carrying the bearer credential. The one canonical name, used by
/// every flow that reads a cookie-borne token.
pub const SESSION_COOKIE: &str = "caddyauth";

/// Bearer credential located by the transport policy, if any.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_token(&parts.headers)))
    }
}

/// Applies the transport search order to a request's headers.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        && token.matches('.').count() == 2
    {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
