//! Uninstall operation

use crate::config::Settings;
use crate::error::Result;
use crate::installer::remove_bundles;
use crate::platform::{HostPlatform, bridge};
use crate::selection::{self, SelectionRequest, SelectorOutcome};
use crate::ui::{Action, InputProvider, Reporter};

use super::RunOutcome;

/// Options for one uninstall run
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    pub all: bool,
    pub names: Vec<String>,
    /// Skip the confirmation for removing every bundle
    pub assume_yes: bool,
    /// Delegate into the compatibility subsystem with these arguments
    pub bridge: Option<Vec<String>>,
}

/// High-level uninstall operation
pub struct UninstallOperation {
    options: UninstallOptions,
}

impl UninstallOperation {
    pub fn new(options: UninstallOptions) -> Self {
        Self { options }
    }

    pub fn execute(
        &self,
        settings: &Settings,
        host: &dyn HostPlatform,
        input: &mut dyn InputProvider,
        reporter: &mut Reporter,
    ) -> Result<RunOutcome> {
        if let Some(ref forwarded) = self.options.bridge {
            reporter.status("Delegating removal to WSL...");
            let code = bridge::delegate(host, &settings.bridge_program, forwarded)?;
            return Ok(RunOutcome::Bridged(code));
        }

        let request = SelectionRequest {
            all: self.options.all,
            names: &self.options.names,
        };
        let selection = match selection::select(
            request,
            &settings.registry,
            Action::Uninstall,
            input,
            reporter,
        )? {
            SelectorOutcome::Quit => {
                reporter.status("Uninstall cancelled.");
                return Ok(RunOutcome::Cancelled);
            }
            SelectorOutcome::Selected(selection) => selection,
        };

        if selection.is_all() && !self.options.assume_yes {
            let prompt = format!(
                "Remove all {} skills from {}?",
                settings.registry.len(),
                settings.target_dir.display()
            );
            if !input.confirm(&prompt, false)? {
                reporter.status("Uninstall cancelled.");
                return Ok(RunOutcome::Cancelled);
            }
        }

        let bundles = selection.resolve(&settings.registry);
        reporter.header(format!("Removing {} skill(s)", bundles.len()));
        remove_bundles(&settings.target_dir, &bundles, reporter);

        reporter.print_summary(Action::Uninstall, &settings.target_dir);
        Ok(RunOutcome::Completed(reporter.exit_code()))
    }
}
