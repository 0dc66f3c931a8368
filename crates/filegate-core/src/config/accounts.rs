//! Local account and template-user configuration.
//!
//! Accounts are declared in the configuration file and loaded into the
//! in-memory user store at startup. The `defaults` section doubles as the
//! template user: it is the identity every request runs under in no-auth
//! mode, and the base record onto which externally validated identities are
//! projected.

use serde::{Deserialize, Serialize};

/// The `[accounts]` configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Template user and per-user fallback values.
    #[serde(default)]
    pub defaults: UserDefaults,
    /// Locally provisioned accounts.
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// Baseline attributes applied to every account that does not override them,
/// and the full definition of the template user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDefaults {
    /// Display locale.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Whether command execution is allowed.
    #[serde(default = "default_true")]
    pub allow_commands: bool,
    /// Whether file editing is allowed.
    #[serde(default = "default_true")]
    pub allow_edit: bool,
    /// Whether creating files and directories is allowed.
    #[serde(default = "default_true")]
    pub allow_new: bool,
    /// Whether publishing is allowed.
    #[serde(default = "default_true")]
    pub allow_publish: bool,
    /// Commands the user may execute.
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,
    /// Filesystem access rules.
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

impl Default for UserDefaults {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            allow_commands: default_true(),
            allow_edit: default_true(),
            allow_new: default_true(),
            allow_publish: default_true(),
            commands: default_commands(),
            rules: Vec::new(),
        }
    }
}

/// A single `[[accounts.users]]` entry.
///
/// Exactly one of `password` (plaintext, hashed during store construction)
/// or `password_hash` (a pre-computed Argon2id digest) should be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserEntry {
    /// Unique login name.
    pub username: String,
    /// Plaintext password, hashed at load time. Prefer `password_hash`.
    #[serde(default)]
    pub password: Option<String>,
    /// Pre-hashed Argon2id digest.
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Whether the account has admin privileges.
    #[serde(default)]
    pub admin: bool,
    /// Human-readable name.
    #[serde(default)]
    pub real_name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Display locale; falls back to the defaults section.
    #[serde(default)]
    pub locale: Option<String>,
    /// Permission overrides; each falls back to the defaults section.
    #[serde(default)]
    pub allow_commands: Option<bool>,
    #[serde(default)]
    pub allow_edit: Option<bool>,
    #[serde(default)]
    pub allow_new: Option<bool>,
    #[serde(default)]
    pub allow_publish: Option<bool>,
    /// Command allow-list override.
    #[serde(default)]
    pub commands: Option<Vec<String>>,
    /// Access rule override.
    #[serde(default)]
    pub rules: Option<Vec<RuleEntry>>,
}

/// An allow/deny filesystem path rule as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    /// `true` to allow, `false` to deny.
    pub allow: bool,
    /// Path prefix the rule applies to.
    pub path: String,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

fn default_commands() -> Vec<String> {
    vec!["git".to_string(), "svn".to_string(), "hg".to_string()]
}
