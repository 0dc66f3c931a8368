//! User entity and access rules.

pub mod model;
pub mod rules;

pub use model::User;
pub use rules::AccessRule;
