//! Install operation
//!
//! Prerequisites are checked once the source location is known, since git is
//! only required when the catalog has to be fetched. With `--wsl` the whole
//! operation is delegated before anything else runs; the delegated run does
//! its own checks inside the subsystem.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::installer::Installer;
use crate::platform::prereq::{self, PrereqOptions};
use crate::platform::{HostPlatform, bridge};
use crate::selection::{self, SelectionRequest, SelectorOutcome};
use crate::source::{self, Provenance};
use crate::ui::{self, Action, InputProvider, Reporter};

use super::RunOutcome;

/// Options for one install run
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub all: bool,
    pub names: Vec<String>,
    /// Explicit local working copy
    pub source: Option<PathBuf>,
    /// Places searched for a working copy when `source` is not given
    pub candidates: Vec<PathBuf>,
    pub assume_yes: bool,
    pub skip_deps: bool,
    pub verbose: bool,
    /// Delegate into the compatibility subsystem with these arguments
    pub bridge: Option<Vec<String>>,
}

/// High-level install operation
pub struct InstallOperation {
    options: InstallOptions,
}

impl InstallOperation {
    pub fn new(options: InstallOptions) -> Self {
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
            reporter.status("Delegating installation to WSL...");
            let code = bridge::delegate(host, &settings.bridge_program, forwarded)?;
            return Ok(RunOutcome::Bridged(code));
        }

        let location = source::locate(
            self.options.source.as_deref(),
            &self.options.candidates,
            settings,
        )?;

        prereq::check(
            host,
            input,
            reporter,
            PrereqOptions {
                need_git: location.needs_fetch(),
                auto_install: settings.auto_install,
                assume_yes: self.options.assume_yes,
            },
        )?;

        if location.needs_fetch() {
            reporter.status(format!("Fetching skills from {}...", settings.repository));
        }
        // Holds the scratch area, if any, until the end of the run
        let source = source::resolve(location, settings)?;
        if source.provenance() == Provenance::Local {
            reporter.status(format!("Using local skills from {}", source.path().display()));
        }

        let request = SelectionRequest {
            all: self.options.all,
            names: &self.options.names,
        };
        let selection =
            match selection::select(request, &settings.registry, Action::Install, input, reporter)? {
                SelectorOutcome::Quit => {
                    reporter.status("Installation cancelled.");
                    return Ok(RunOutcome::Cancelled);
                }
                SelectorOutcome::Selected(selection) => selection,
            };

        let bundles = selection.resolve(&settings.registry);
        reporter.header(format!("Installing {} skill(s)", bundles.len()));

        let mut progress = ui::progress_for(bundles.len(), self.options.verbose);
        Installer::new(settings, host)
            .skip_dependencies(self.options.skip_deps)
            .install_bundles(&source, &bundles, reporter, progress.as_mut());

        reporter.print_summary(Action::Install, &settings.target_dir);
        Ok(RunOutcome::Completed(reporter.exit_code()))
    }
}
