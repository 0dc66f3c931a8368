//! Session token minting for diagnostics.

use clap::Args;

use filegate_auth::password::PasswordHasher;
use filegate_auth::session::{SessionIssuer, issuer::resolve_secret};
use filegate_core::error::AppError;
use filegate_core::traits::UserStore;
use filegate_store::MemoryUserStore;

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Account to mint a session token for
    #[arg(short, long)]
    pub username: String,
}

/// Execute the token command
///
/// Mints against the configured signing secret; with no secret configured
/// the token is signed with a throwaway secret and will not validate
/// against a running server.
pub async fn execute(args: &TokenArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let store = MemoryUserStore::from_config(&config.accounts, &PasswordHasher::new())?;
    let user = store.lookup(&args.username).await?.ok_or_else(|| {
        AppError::not_found(format!("Account '{}' is not provisioned", args.username))
    })?;

    let secret = resolve_secret(&config.auth);
    let issuer = SessionIssuer::new(&secret, &config.auth);
    let token = issuer.issue(&user, config.auth.no_auth)?;

    println!("{token}");
    Ok(())
}
