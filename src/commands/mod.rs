//! Command implementations for the skilldeploy CLI
//!
//! Each command turns parsed arguments into resolved [`Settings`] and runs the
//! matching operation. Commands return the process exit code; fatal errors are
//! returned to `main` for printing.

pub mod completions;
pub mod install;
pub mod list;
pub mod uninstall;
pub mod version;

use std::path::PathBuf;

use crate::config::{ConfigFile, Overrides, Settings};
use crate::error::Result;
use crate::platform::{HostPlatform, SystemPlatform};

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub target: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl GlobalOptions {
    /// Load the config file and merge it with flag/environment overrides
    pub fn settings(&self, mut overrides: Overrides) -> Result<Settings> {
        let file = ConfigFile::load(self.config.as_deref())?;
        overrides.target_dir = self.target.clone();
        Settings::resolve(file, overrides, SystemPlatform.home_dir().as_deref())
    }
}
