//! # filegate-api
//!
//! HTTP API layer for FileGate built on Axum.
//!
//! Provides the auth endpoints (login, renew, me), the bearer-token
//! extraction policy, middleware (logging, CORS, tracing), DTOs, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
