//! User entity model.

use serde::{Deserialize, Serialize};

use super::rules::AccessRule;

/// An authenticated identity in the FileGate system.
///
/// Persistent users come from the user store; transient users are derived
/// per request when an externally issued identity token is validated. The
/// same struct is embedded (sanitized) in session token claims, so field
/// names follow the camelCase wire convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique login name.
    pub username: String,
    /// Argon2id password hash. Present only for locally provisioned
    /// accounts, cleared before the user is serialized outward.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password_hash: String,
    /// Whether the user has admin privileges.
    #[serde(default)]
    pub admin: bool,
    /// Human-readable name.
    #[serde(default)]
    pub real_name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Display locale.
    #[serde(default)]
    pub locale: String,
    /// Whether command execution is allowed.
    #[serde(default)]
    pub allow_commands: bool,
    /// Whether file editing is allowed.
    #[serde(default)]
    pub allow_edit: bool,
    /// Whether creating files and directories is allowed.
    #[serde(default)]
    pub allow_new: bool,
    /// Whether publishing is allowed.
    #[serde(default)]
    pub allow_publish: bool,
    /// Commands the user may execute.
    #[serde(default)]
    pub commands: Vec<String>,
    /// Filesystem access rules, consulted by the authorization layer.
    #[serde(default)]
    pub rules: Vec<AccessRule>,
}

impl User {
    /// Returns a copy with the password hash cleared, safe for embedding in
    /// token claims or response bodies.
    pub fn sanitized(&self) -> Self {
        let mut user = self.clone();
        user.password_hash.clear();
        user
    }

    /// Whether the user may run the given command.
    pub fn can_run(&self, command: &str) -> bool {
        self.allow_commands && self.commands.iter().any(|c| c == command)
    }
}
