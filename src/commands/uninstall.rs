//! Uninstall command implementation

use crate::cli::UninstallArgs;
use crate::config::Overrides;
use crate::error::Result;
use crate::operations::{UninstallOperation, UninstallOptions};
use crate::platform::SystemPlatform;
use crate::ui::{Reporter, TerminalInput};

use super::GlobalOptions;

/// Run the uninstall command
pub fn run(globals: &GlobalOptions, args: UninstallArgs) -> Result<i32> {
    let settings = globals.settings(Overrides::default())?;

    let options = UninstallOptions {
        bridge: args.wsl.then(|| args.bridge_args(globals.verbose)),
        all: args.all,
        names: args.names,
        assume_yes: args.yes,
    };

    let mut input = TerminalInput::new();
    let mut reporter = Reporter::new();
    let outcome = UninstallOperation::new(options).execute(
        &settings,
        &SystemPlatform,
        &mut input,
        &mut reporter,
    )?;

    Ok(outcome.exit_code())
}
