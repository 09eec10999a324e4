//! Git access for fetching the bundle catalog
//!
//! Authentication is delegated to git's native setup:
//! - SSH keys from ~/.ssh/ and the SSH agent
//! - Git credential helpers
//! - Environment variables (GIT_SSH_COMMAND, etc.)

mod auth;
mod clone;
mod error;
mod url;

pub use clone::clone;
