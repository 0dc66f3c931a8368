//! Response DTOs.

use serde::{Deserialize, Serialize};

use filegate_entity::user::{AccessRule, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Username.
    pub username: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// Human-readable name.
    pub real_name: String,
    /// Email address.
    pub email: Option<String>,
    /// Display locale.
    pub locale: String,
    /// Permission flags.
    pub allow_commands: bool,
    pub allow_edit: bool,
    pub allow_new: bool,
    pub allow_publish: bool,
    /// Commands the user may execute.
    pub commands: Vec<String>,
    /// Filesystem access rules.
    pub rules: Vec<AccessRule>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            admin: user.admin,
            real_name: user.real_name,
            email: user.email,
            locale: user.locale,
            allow_commands: user.allow_commands,
            allow_edit: user.allow_edit,
            allow_new: user.allow_new,
            allow_publish: user.allow_publish,
            commands: user.commands,
            rules: user.rules,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
