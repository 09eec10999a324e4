//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use uninstall::UninstallArgs;

/// skilldeploy - skill bundle installer
///
/// Install, update and remove skill bundles for the Claude Code assistant.
#[derive(Parser, Debug)]
#[command(
    name = "skilldeploy",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for Claude Code skill bundles",
    long_about = "skilldeploy installs, updates and removes skill bundles in the per-user \
                  skills directory (~/.claude/skills by default), natively or inside WSL.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skilldeploy install                   \x1b[90m# Pick skills from a menu\x1b[0m\n   \
                  skilldeploy install --all             \x1b[90m# Install every skill\x1b[0m\n   \
                  skilldeploy install code-review       \x1b[90m# Install one skill\x1b[0m\n   \
                  skilldeploy install --all --wsl       \x1b[90m# Install inside WSL\x1b[0m\n   \
                  skilldeploy uninstall --all           \x1b[90m# Remove every skill\x1b[0m\n   \
                  skilldeploy list                      \x1b[90m# Show installed state\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Skills directory (defaults to ~/.claude/skills)
    #[arg(long, short = 't', global = true, env = "SKILLDEPLOY_TARGET_DIR", value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/skilldeploy/config.yaml)
    #[arg(long, global = true, env = "SKILLDEPLOY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or update skill bundles
    Install(InstallArgs),

    /// Remove installed skill bundles
    Uninstall(UninstallArgs),

    /// List known skill bundles and whether they are installed
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["skilldeploy", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["skilldeploy", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let target = if cfg!(windows) {
            r"C:\temp\skills"
        } else {
            "/tmp/skills"
        };
        let cli = Cli::try_parse_from([
            "skilldeploy",
            "-v",
            "--target",
            target,
            "--config",
            "custom.yaml",
            "list",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.target, Some(PathBuf::from(target)));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["skilldeploy", "install", "-v", "-t", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.target, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["skilldeploy", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["skilldeploy"]).is_err());
    }

    #[test]
    #[serial]
    fn test_target_from_environment() {
        let original = std::env::var("SKILLDEPLOY_TARGET_DIR").ok();
        unsafe {
            std::env::set_var("SKILLDEPLOY_TARGET_DIR", "/tmp/env-skills");
        }

        let from_env = Cli::try_parse_from(["skilldeploy", "list"]).unwrap();
        let from_flag =
            Cli::try_parse_from(["skilldeploy", "list", "--target", "/tmp/flag-skills"]).unwrap();

        unsafe {
            match original {
                Some(value) => std::env::set_var("SKILLDEPLOY_TARGET_DIR", value),
                None => std::env::remove_var("SKILLDEPLOY_TARGET_DIR"),
            }
        }

        assert_eq!(from_env.target, Some(PathBuf::from("/tmp/env-skills")));
        assert_eq!(from_flag.target, Some(PathBuf::from("/tmp/flag-skills")));
    }
}
