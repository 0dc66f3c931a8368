//! Store traits consumed by the auth core.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read-only user lookup used on the login path.
///
/// Defined generically over the entity type so this crate stays free of
/// internal dependencies; the entity crate's `User` is the only instantiation
/// in practice. Implementations are built before the server starts accepting
/// requests and are never mutated afterwards, so they can be shared across
/// request tasks without locking.
#[async_trait]
pub trait UserStore<U>: Send + Sync + 'static
where
    U: Send + Sync + 'static,
{
    /// Find a user by username. `Ok(None)` means the account does not exist;
    /// the caller decides whether that is an error.
    async fn lookup(&self, username: &str) -> AppResult<Option<U>>;
}
