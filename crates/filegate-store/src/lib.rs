//! # filegate-store
//!
//! User store collaborator for FileGate. Accounts are declared in
//! configuration, materialized once at startup (plaintext passwords hashed,
//! defaults merged), and served read-only for the process lifetime.

pub mod memory;

pub use memory::{MemoryUserStore, template_user};
