//! In-memory user store materialized from configuration.

use std::collections::HashMap;

use async_trait::async_trait;

use filegate_auth::password::PasswordHasher;
use filegate_core::config::accounts::{AccountsConfig, RuleEntry, UserDefaults, UserEntry};
use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_core::traits::UserStore;
use filegate_entity::user::{AccessRule, User};

/// Username of the template user.
const TEMPLATE_USERNAME: &str = "admin";

/// Read-only user store backed by a map built at startup.
///
/// Construction happens before the server accepts requests, so lookups run
/// lock-free on shared references.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    /// Creates a store over already-materialized users.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    /// Materializes the configured accounts into a store.
    ///
    /// Plaintext passwords are hashed here so digests never have to appear
    /// in configuration; pre-hashed entries are taken verbatim. Duplicate
    /// usernames and nameless entries are configuration errors.
    pub fn from_config(accounts: &AccountsConfig, hasher: &PasswordHasher) -> AppResult<Self> {
        let mut users = HashMap::new();

        for entry in &accounts.users {
            if entry.username.is_empty() {
                return Err(AppError::configuration("Account entry without a username"));
            }

            let password_hash = match (&entry.password_hash, &entry.password) {
                (Some(hash), _) => hash.clone(),
                (None, Some(plain)) => hasher.hash(plain)?,
                (None, None) => String::new(),
            };

            let user = materialize(entry, &accounts.defaults, password_hash);
            if users.insert(user.username.clone(), user).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate account entry for '{}'",
                    entry.username
                )));
            }
        }

        tracing::info!(accounts = users.len(), "user store loaded");
        Ok(Self { users })
    }

    /// Number of provisioned accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore<User> for MemoryUserStore {
    async fn lookup(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(username).cloned())
    }
}

/// Builds the template user from the defaults section.
///
/// The template is the identity of every request in no-auth mode and the
/// base record for projecting externally validated identities. It carries
/// admin privileges locally; projection strips them.
pub fn template_user(accounts: &AccountsConfig) -> User {
    User {
        username: TEMPLATE_USERNAME.to_string(),
        password_hash: String::new(),
        admin: true,
        real_name: String::new(),
        email: None,
        locale: accounts.defaults.locale.clone(),
        allow_commands: accounts.defaults.allow_commands,
        allow_edit: accounts.defaults.allow_edit,
        allow_new: accounts.defaults.allow_new,
        allow_publish: accounts.defaults.allow_publish,
        commands: accounts.defaults.commands.clone(),
        rules: convert_rules(&accounts.defaults.rules),
    }
}

fn materialize(entry: &UserEntry, defaults: &UserDefaults, password_hash: String) -> User {
    User {
        username: entry.username.clone(),
        password_hash,
        admin: entry.admin,
        real_name: entry.real_name.clone(),
        email: entry.email.clone(),
        locale: entry
            .locale
            .clone()
            .unwrap_or_else(|| defaults.locale.clone()),
        allow_commands: entry.allow_commands.unwrap_or(defaults.allow_commands),
        allow_edit: entry.allow_edit.unwrap_or(defaults.allow_edit),
        allow_new: entry.allow_new.unwrap_or(defaults.allow_new),
        allow_publish: entry.allow_publish.unwrap_or(defaults.allow_publish),
        commands: entry
            .commands
            .clone()
            .unwrap_or_else(|| defaults.commands.clone()),
        rules: convert_rules(entry.rules.as_ref().unwrap_or(&defaults.rules)),
    }
}

fn convert_rules(rules: &[RuleEntry]) -> Vec<AccessRule> {
    rules
        .iter()
        .map(|rule| AccessRule {
            allow: rule.allow,
            path: rule.path.clone(),
        })
        .collect()
}
