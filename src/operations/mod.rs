//! High-level operations
//!
//! Each operation wires the pipeline stages together:
//! - [`InstallOperation`]: prerequisites, bridge, source, selection, copy
//! - [`UninstallOperation`]: bridge, selection, confirmation, removal
//! - [`ListOperation`]: registry with installed state
//!
//! Operations never print errors or exit; they return a [`RunOutcome`] or a
//! fatal [`crate::error::SkillError`] and leave that to `main`.

pub mod install;
pub mod list;
pub mod uninstall;

pub use install::{InstallOperation, InstallOptions};
pub use list::ListOperation;
pub use uninstall::{UninstallOperation, UninstallOptions};

/// How an operation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Ran to the summary; carries the reporter's exit code
    Completed(i32),
    /// The user quit or declined; nothing was changed
    Cancelled,
    /// Delegated into the compatibility subsystem; carries its exit code
    Bridged(i32),
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Completed(code) | RunOutcome::Bridged(code) => code,
            RunOutcome::Cancelled => 0,
        }
    }
}
