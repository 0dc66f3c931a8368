//! Password hashing command for provisioning account entries.

use clap::Args;

use filegate_auth::password::{PasswordHasher, PasswordValidator};
use filegate_core::error::AppError;

/// Arguments for the hash command
#[derive(Debug, Args)]
pub struct HashArgs {
    /// Password to hash; prompted interactively when omitted
    #[arg(short, long)]
    pub password: Option<String>,

    /// Skip the strength policy check
    #[arg(long)]
    pub force: bool,
}

/// Execute the hash command
pub async fn execute(args: &HashArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let password = match &args.password {
        Some(password) => password.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Password prompt failed: {e}")))?,
    };

    if !args.force {
        PasswordValidator::new(&config.auth).validate(&password)?;
    }

    let digest = PasswordHasher::new().hash(&password)?;
    println!("{digest}");
    Ok(())
}
