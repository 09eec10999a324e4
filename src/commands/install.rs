//! Install command implementation
//!
//! The installation process:
//! 1. Resolve settings (flags, environment, config file)
//! 2. Delegate into WSL when `--wsl` is given
//! 3. Locate or fetch the skill catalog, checking prerequisites
//! 4. Select skills (flags, names, or the numbered menu)
//! 5. Copy each skill and run its dependency step
//! 6. Print the summary

use crate::cli::InstallArgs;
use crate::config::Overrides;
use crate::error::Result;
use crate::operations::{InstallOperation, InstallOptions};
use crate::platform::SystemPlatform;
use crate::source::candidate_dirs;
use crate::ui::{Reporter, TerminalInput};

use super::GlobalOptions;

/// Run the install command
pub fn run(globals: &GlobalOptions, args: InstallArgs) -> Result<i32> {
    let settings = globals.settings(Overrides {
        repository: args.repo.clone(),
        branch: args.branch.clone(),
        no_auto_install: args.no_auto_install,
        ..Overrides::default()
    })?;

    let options = InstallOptions {
        bridge: args.wsl.then(|| args.bridge_args(globals.verbose)),
        all: args.all,
        names: args.names,
        candidates: if args.source.is_some() {
            Vec::new()
        } else {
            candidate_dirs()
        },
        source: args.source,
        assume_yes: args.yes,
        skip_deps: args.skip_deps,
        verbose: globals.verbose,
    };

    let mut input = TerminalInput::new();
    let mut reporter = Reporter::new();
    let outcome = InstallOperation::new(options).execute(
        &settings,
        &SystemPlatform,
        &mut input,
        &mut reporter,
    )?;

    Ok(outcome.exit_code())
}
