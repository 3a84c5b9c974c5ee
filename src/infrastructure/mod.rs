//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves the home directory once at startup and derives every other
//! location from it, so nothing else in the crate reads the environment.

pub mod paths;

pub use paths::{data_dir, ensure_private_dir, home_dir, vault_dir, VAULT_DIR_MODE};
