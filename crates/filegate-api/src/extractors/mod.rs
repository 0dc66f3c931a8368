//! Custom Axum extractors.

pub mod auth;
pub mod token;

pub use auth::AuthUser;
pub use token::BearerToken;
