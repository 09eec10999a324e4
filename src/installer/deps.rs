//! Dependent-package step run inside an installed bundle

use std::path::Path;

use crate::config::DependencyManager;
use crate::platform::{CommandSpec, HostPlatform};

/// Run every manager whose manifest sits at the bundle root
///
/// Returns one warning per failed manager. Failures never undo the copy.
pub fn install_dependencies(
    host: &dyn HostPlatform,
    bundle_dir: &Path,
    managers: &[DependencyManager],
) -> Vec<String> {
    let mut warnings = Vec::new();

    for manager in managers {
        if !bundle_dir.join(&manager.manifest).is_file() {
            continue;
        }

        let Some(command) = CommandSpec::from_argv(&manager.command) else {
            warnings.push(format!("no command configured for {}", manager.manifest));
            continue;
        };
        let command = command.current_dir(bundle_dir);
        tracing::debug!(manifest = %manager.manifest, command = %command.display(), "installing dependencies");

        match host.run(&command) {
            Ok(outcome) if outcome.success() => {}
            Ok(outcome) => warnings.push(format!(
                "dependency install '{}' failed with {}",
                command.display(),
                outcome.describe()
            )),
            Err(e) => warnings.push(format!(
                "could not run dependency install '{}': {}",
                command.display(),
                e
            )),
        }
    }

    warnings
}
