//! Bundle selection
//!
//! Turns `--all`, positional bundle names, or a typed menu answer into a
//! [`Selection`]. Invalid entries are reported one by one and skipped; they
//! never abort the remaining valid entries.

use console::Style;

use crate::config::{BundleId, Registry};
use crate::error::Result;
use crate::ui::{Action, InputProvider, Reporter};

/// Bundles chosen for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every registry entry
    All,
    /// Explicit entries in first-seen order, without duplicates
    Bundles(Vec<BundleId>),
}

impl Selection {
    /// Concrete bundles in processing order
    pub fn resolve<'a>(&'a self, registry: &'a Registry) -> Vec<&'a BundleId> {
        match self {
            Selection::All => registry.iter().collect(),
            Selection::Bundles(bundles) => bundles.iter().collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// Result of running the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    Selected(Selection),
    /// The user chose to quit; nothing may be touched
    Quit,
}

/// What the command line asked for
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRequest<'a> {
    pub all: bool,
    pub names: &'a [String],
}

/// One typed menu answer, before invalid tokens are reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAnswer {
    All,
    Quit,
    Numbers {
        bundles: Vec<BundleId>,
        invalid: Vec<String>,
    },
}

/// Parse a menu answer such as `1,3`, `a` or `q`
pub fn parse_menu_answer(answer: &str, registry: &Registry) -> MenuAnswer {
    let trimmed = answer.trim();
    match trimmed.to_lowercase().as_str() {
        "a" | "all" => return MenuAnswer::All,
        "q" | "quit" => return MenuAnswer::Quit,
        _ => {}
    }

    let mut bundles: Vec<BundleId> = Vec::new();
    let mut invalid = Vec::new();

    for token in trimmed.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<usize>().ok().and_then(|n| registry.by_number(n)) {
            Some(id) if !bundles.contains(id) => bundles.push(id.clone()),
            Some(_) => {}
            None => invalid.push(token.to_string()),
        }
    }

    MenuAnswer::Numbers { bundles, invalid }
}

/// Selection from positional names; unknown names are warned about and skipped
pub fn from_names(names: &[String], registry: &Registry, reporter: &mut Reporter) -> Selection {
    let mut bundles: Vec<BundleId> = Vec::new();

    for name in names {
        match registry.find(name) {
            Some(id) if !bundles.contains(id) => bundles.push(id.clone()),
            Some(_) => {}
            None => reporter.warn(format!("Unknown bundle '{name}'; skipped")),
        }
    }

    Selection::Bundles(bundles)
}

fn render_menu(registry: &Registry, action: Action, reporter: &Reporter) {
    let verb = match action {
        Action::Install => "install",
        Action::Uninstall => "uninstall",
    };
    let number = Style::new().cyan();

    reporter.header(format!("Available skills to {verb}:"));
    for (idx, id) in registry.iter().enumerate() {
        reporter.status(format!("  {} {}", number.apply_to(format!("{:>2})", idx + 1)), id));
    }
    reporter.status(format!("  {} All skills", number.apply_to(" a)")));
    reporter.status(format!("  {} Quit", number.apply_to(" q)")));
}

/// Ask the user to pick bundles from the numbered menu
pub fn prompt(
    registry: &Registry,
    action: Action,
    input: &mut dyn InputProvider,
    reporter: &mut Reporter,
) -> Result<SelectorOutcome> {
    render_menu(registry, action, reporter);

    let Some(answer) = input.read_line("Enter numbers separated by commas (e.g. 1,3), 'a' or 'q':")?
    else {
        tracing::debug!("no selection input");
        return Ok(SelectorOutcome::Selected(Selection::Bundles(Vec::new())));
    };

    match parse_menu_answer(&answer, registry) {
        MenuAnswer::All => Ok(SelectorOutcome::Selected(Selection::All)),
        MenuAnswer::Quit => Ok(SelectorOutcome::Quit),
        MenuAnswer::Numbers { bundles, invalid } => {
            for token in invalid {
                reporter.warn(format!(
                    "Invalid selection '{token}' (expected a number from 1 to {}); skipped",
                    registry.len()
                ));
            }
            Ok(SelectorOutcome::Selected(Selection::Bundles(bundles)))
        }
    }
}

/// Produce a selection from flags, names, or the interactive menu
pub fn select(
    request: SelectionRequest<'_>,
    registry: &Registry,
    action: Action,
    input: &mut dyn InputProvider,
    reporter: &mut Reporter,
) -> Result<SelectorOutcome> {
    if request.all {
        return Ok(SelectorOutcome::Selected(Selection::All));
    }

    if !request.names.is_empty() {
        return Ok(SelectorOutcome::Selected(from_names(
            request.names,
            registry,
            reporter,
        )));
    }

    prompt(registry, action, input, reporter)
}
