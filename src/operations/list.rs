//! List operation

use console::Style;

use crate::config::{BundleId, Settings};
use crate::ui::Reporter;

/// Registry entry with its installed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedBundle<'a> {
    pub number: usize,
    pub bundle: &'a BundleId,
    pub installed: bool,
}

/// Prints the registry with installed state
pub struct ListOperation;

impl ListOperation {
    /// Registry entries in menu order
    pub fn entries(settings: &Settings) -> Vec<ListedBundle<'_>> {
        settings
            .registry
            .iter()
            .enumerate()
            .map(|(idx, bundle)| ListedBundle {
                number: idx + 1,
                bundle,
                installed: settings.target_dir.join(bundle).is_dir(),
            })
            .collect()
    }

    pub fn execute(settings: &Settings, reporter: &Reporter) {
        reporter.header("Available skills:");
        if settings.registry.is_empty() {
            reporter.status("  (no skills configured)");
        }
        for entry in Self::entries(settings) {
            let state = if entry.installed {
                Style::new().green().apply_to("installed")
            } else {
                Style::new().dim().apply_to("not installed")
            };
            reporter.status(format!("  {:>2}) {:<28} {}", entry.number, entry.bundle.as_str(), state));
        }
        reporter.status(format!(
            "\n{} {}",
            Style::new().bold().apply_to("Skills directory:"),
            settings.target_dir.display()
        ));
    }
}
