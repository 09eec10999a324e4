//! External tool checks
//!
//! git is required whenever the catalog has to be fetched. The Node.js
//! runtime and the assistant CLI are only used by installed bundles, so their
//! absence is a warning, optionally followed by a confirmed auto-install.

use crate::error::{Result, missing_prerequisite};
use crate::ui::{InputProvider, Reporter};

use super::{CommandSpec, HostOs, HostPlatform};

/// A recommended tool that can be offered for installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub program: &'static str,
    pub purpose: &'static str,
}

pub const NODE: Tool = Tool {
    name: "Node.js",
    program: "node",
    purpose: "bundles with package.json dependencies need it",
};

pub const CLAUDE_CLI: Tool = Tool {
    name: "Claude Code CLI",
    program: "claude",
    purpose: "installed skills are loaded by it",
};

const RECOMMENDED: &[Tool] = &[NODE, CLAUDE_CLI];

/// How the checker behaves for one invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct PrereqOptions {
    /// The catalog will be cloned, so git must be present
    pub need_git: bool,
    /// Offer to install missing recommended tools
    pub auto_install: bool,
    /// Accept offers without prompting
    pub assume_yes: bool,
}

/// Remediation text for a missing git installation
pub fn git_remediation(os: HostOs) -> String {
    match os {
        HostOs::Windows => "Install Git for Windows with 'winget install --id Git.Git -e' \
                            or from https://git-scm.com/download/win"
            .to_string(),
        HostOs::MacOs => "Install git with 'xcode-select --install' or 'brew install git'".to_string(),
        HostOs::Linux | HostOs::Other => {
            "Install git with your package manager, e.g. 'sudo apt-get install git'".to_string()
        }
    }
}

fn with_sudo(host: &dyn HostPlatform, argv: &[&str]) -> CommandSpec {
    if host.has_program("sudo") {
        CommandSpec::new("sudo").args(argv.iter().copied())
    } else {
        let mut words = argv.iter().copied();
        let program = words.next().unwrap_or_default();
        CommandSpec::new(program).args(words)
    }
}

/// Command that installs a tool with whatever package manager is present
pub fn install_command(host: &dyn HostPlatform, tool: Tool) -> Option<CommandSpec> {
    if tool == CLAUDE_CLI {
        return host
            .has_program("npm")
            .then(|| CommandSpec::new("npm").args(["install", "-g", "@anthropic-ai/claude-code"]));
    }

    if tool != NODE {
        return None;
    }

    match host.os() {
        HostOs::Windows => host
            .has_program("winget")
            .then(|| CommandSpec::new("winget").args(["install", "-e", "--id", "OpenJS.NodeJS.LTS"])),
        HostOs::MacOs => host
            .has_program("brew")
            .then(|| CommandSpec::new("brew").args(["install", "node"])),
        HostOs::Linux | HostOs::Other => {
            if host.has_program("brew") {
                Some(CommandSpec::new("brew").args(["install", "node"]))
            } else if host.has_program("apt-get") {
                Some(with_sudo(host, &["apt-get", "install", "-y", "nodejs", "npm"]))
            } else if host.has_program("dnf") {
                Some(with_sudo(host, &["dnf", "install", "-y", "nodejs"]))
            } else if host.has_program("pacman") {
                Some(with_sudo(host, &["pacman", "-S", "--noconfirm", "nodejs", "npm"]))
            } else {
                None
            }
        }
    }
}

/// Verify required tools and offer to install recommended ones
pub fn check(
    host: &dyn HostPlatform,
    input: &mut dyn InputProvider,
    reporter: &mut Reporter,
    options: PrereqOptions,
) -> Result<()> {
    if options.need_git && !host.has_program("git") {
        return Err(missing_prerequisite("git", git_remediation(host.os())));
    }

    for tool in RECOMMENDED {
        if host.has_program(tool.program) {
            tracing::debug!(tool = tool.program, "found");
            continue;
        }
        offer_install(host, input, reporter, *tool, options)?;
    }

    Ok(())
}

fn offer_install(
    host: &dyn HostPlatform,
    input: &mut dyn InputProvider,
    reporter: &mut Reporter,
    tool: Tool,
    options: PrereqOptions,
) -> Result<()> {
    let command = install_command(host, tool);
    let can_offer = options.auto_install && (options.assume_yes || input.is_interactive());

    let Some(command) = command.filter(|_| can_offer) else {
        reporter.warn(format!(
            "{} ({}) not found; {}",
            tool.name, tool.program, tool.purpose
        ));
        return Ok(());
    };

    let accepted = options.assume_yes
        || input.confirm(
            &format!(
                "{} is not installed. Install it now with '{}'?",
                tool.name,
                command.display()
            ),
            true,
        )?;

    if !accepted {
        reporter.warn(format!(
            "{} not installed; {}",
            tool.name, tool.purpose
        ));
        return Ok(());
    }

    reporter.status(format!("Installing {}...", tool.name));
    match host.run(&command) {
        Ok(outcome) if outcome.success() => reporter.success(format!("Installed {}", tool.name)),
        Ok(outcome) => reporter.warn(format!(
            "'{}' failed with {}",
            command.display(),
            outcome.describe()
        )),
        Err(e) => reporter.warn(format!("could not run '{}': {}", command.display(), e)),
    }

    Ok(())
}
