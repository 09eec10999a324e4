//! Bundle installation
//!
//! This module handles:
//! - Mirroring `SourceRoot/{id}` into `TargetDirectory/{id}` ([`sync`])
//! - Exclusion patterns applied during the copy ([`exclude`])
//! - The optional dependent-package step ([`deps`])
//! - Removing installed bundles ([`remove`])
//!
//! Reinstalling a bundle deletes its target directory first, so the result
//! always matches the source exactly. Local edits inside an installed bundle
//! are lost.

pub mod deps;
pub mod exclude;
pub mod remove;
pub mod sync;

use std::fs;
use std::path::Path;

use crate::config::{BundleId, DependencyManager, Settings};
use crate::error::{Result, write_failed};
use crate::platform::HostPlatform;
use crate::source::SourceRoot;
use crate::ui::{Outcome, ProgressReporter, Reporter};

pub use exclude::ExclusionRules;
pub use remove::remove_bundles;

/// Copies bundles into the target directory
pub struct Installer<'a> {
    host: &'a dyn HostPlatform,
    target_dir: &'a Path,
    rules: &'a ExclusionRules,
    dependency_managers: &'a [DependencyManager],
    install_dependencies: bool,
}

impl<'a> Installer<'a> {
    pub fn new(settings: &'a Settings, host: &'a dyn HostPlatform) -> Self {
        Self {
            host,
            target_dir: &settings.target_dir,
            rules: &settings.exclusion_rules,
            dependency_managers: &settings.dependency_managers,
            install_dependencies: true,
        }
    }

    /// Disable the dependent-package step
    pub fn skip_dependencies(mut self, skip: bool) -> Self {
        self.install_dependencies = !skip;
        self
    }

    /// Install one bundle from `source_dir`
    ///
    /// A missing source directory is a skip, not an error.
    pub fn install_bundle(
        &self,
        source_dir: &Path,
        bundle: &BundleId,
        progress: &mut dyn ProgressReporter,
    ) -> Result<Outcome> {
        if !source_dir.is_dir() {
            return Ok(Outcome::Skipped {
                reason: format!("not found in source ({})", source_dir.display()),
            });
        }

        fs::create_dir_all(self.target_dir).map_err(|e| write_failed(self.target_dir, &e))?;

        let target = self.target_dir.join(bundle);
        if remove::remove_path(&target)? {
            tracing::debug!(bundle = %bundle, "replacing existing installation");
        }

        let copied = match sync::copy_bundle(source_dir, &target, self.rules, progress) {
            Ok(copied) => copied,
            Err(e) => {
                // Never leave a half-copied bundle behind
                if let Err(cleanup) = remove::remove_path(&target) {
                    tracing::warn!(bundle = %bundle, error = %cleanup, "failed to remove partial copy");
                }
                return Err(e);
            }
        };
        tracing::debug!(bundle = %bundle, files = copied, "copied");

        if !self.install_dependencies {
            return Ok(Outcome::Installed);
        }

        let warnings = deps::install_dependencies(self.host, &target, self.dependency_managers);
        if warnings.is_empty() {
            Ok(Outcome::Installed)
        } else {
            Ok(Outcome::InstalledWithWarning {
                message: warnings.join("; "),
            })
        }
    }

    /// Install each bundle in order; per-bundle problems are recorded, not raised
    pub fn install_bundles(
        &self,
        source: &SourceRoot,
        bundles: &[&BundleId],
        reporter: &mut Reporter,
        progress: &mut dyn ProgressReporter,
    ) {
        let total = bundles.len();

        for (idx, bundle) in bundles.iter().enumerate() {
            progress.update_bundle(bundle.as_str(), idx + 1, total);

            let outcome = self
                .install_bundle(&source.bundle_dir(bundle), bundle, progress)
                .unwrap_or_else(|e| Outcome::Failed {
                    reason: e.to_string(),
                });
            let mut pending = Some(outcome);
            progress.suspend(&mut || {
                if let Some(outcome) = pending.take() {
                    reporter.record(bundle.as_str(), outcome);
                }
            });

            progress.inc_bundle();
        }

        progress.finish();
    }
}
