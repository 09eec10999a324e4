//! Status output and per-bundle outcome accounting
//!
//! The reporter is the only place that prints status lines. It also keeps the
//! tally that drives the final summary and the process exit code.

use std::path::Path;

use console::Style;

/// What happened to one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    /// Installed, but an optional step (dependency install) failed
    InstalledWithWarning { message: String },
    Removed,
    Skipped { reason: String },
    Failed { reason: String },
}

/// Outcome for one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub bundle: String,
    pub outcome: Outcome,
}

/// Which pipeline produced the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
}

/// Collects outcomes and prints user-facing messages
#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<BundleReport>,
    warnings: Vec<String>,
    quiet: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter that records without printing
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// Plain status line
    pub fn status(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    /// Section header
    pub fn header(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("\n{}", Style::new().bold().apply_to(message.as_ref()));
        }
    }

    /// Success line
    pub fn success(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!(
                "{} {}",
                Style::new().green().bold().apply_to("✓"),
                message.as_ref()
            );
        }
    }

    /// Recoverable problem; always recorded
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message);
        if !self.quiet {
            eprintln!(
                "{} {}",
                Style::new().yellow().bold().apply_to("Warning:"),
                message
            );
        }
        self.warnings.push(message);
    }

    /// Record the outcome for a bundle and print a matching line
    pub fn record(&mut self, bundle: impl Into<String>, outcome: Outcome) {
        let bundle = bundle.into();
        match &outcome {
            Outcome::Installed => self.success(format!("Installed {bundle}")),
            Outcome::Removed => self.success(format!("Removed {bundle}")),
            Outcome::InstalledWithWarning { message } => {
                self.success(format!("Installed {bundle}"));
                self.warn(format!("{bundle}: {message}"));
            }
            Outcome::Skipped { reason } => self.warn(format!("Skipping {bundle}: {reason}")),
            Outcome::Failed { reason } => {
                tracing::debug!(bundle = %bundle, reason = %reason, "bundle failed");
                if !self.quiet {
                    eprintln!(
                        "{} {}: {}",
                        Style::new().red().bold().apply_to("Failed:"),
                        bundle,
                        reason
                    );
                }
            }
        }
        self.entries.push(BundleReport { bundle, outcome });
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[BundleReport] {
        &self.entries
    }

    #[cfg(test)]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    pub fn installed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Installed | Outcome::InstalledWithWarning { .. }))
    }

    pub fn removed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Removed))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// Exit code for a pipeline that ran to completion
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }

    /// Final summary plus the installation target path
    pub fn print_summary(&self, action: Action, target_dir: &Path) {
        if self.quiet {
            return;
        }

        let done = match action {
            Action::Install => format!("{} installed", self.installed_count()),
            Action::Uninstall => format!("{} removed", self.removed_count()),
        };
        let mut parts = vec![done, format!("{} skipped", self.skipped_count())];
        if self.has_failures() {
            parts.push(format!("{} failed", self.failed_count()));
        }

        let mut line = parts.join(", ");
        if !self.warnings.is_empty() {
            line.push_str(&format!(" ({} warning(s))", self.warnings.len()));
        }

        let title = if self.has_failures() {
            Style::new().red().bold().apply_to("Completed with errors:")
        } else {
            Style::new().green().bold().apply_to("Done:")
        };

        println!("\n{title} {line}");
        println!(
            "{} {}",
            Style::new().bold().apply_to("Skills directory:"),
            target_dir.display()
        );
    }
}
