//! skilldeploy - skill bundle installer
//!
//! Installs, updates and removes skill bundles in the per-user skills
//! directory of the Claude Code assistant, natively or inside WSL.

use clap::Parser;
use console::Style;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod git;
mod installer;
mod operations;
mod platform;
mod selection;
mod source;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::GlobalOptions;
use error::SkillError;

const LOG_ENV: &str = "SKILLDEPLOY_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("skilldeploy=debug,warn")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_error(err: &SkillError) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", Style::new().cyan().apply_to("help:"), help);
    }
}

/// Run the command and map the result to an exit code
///
/// Everything the command owns, including any scratch area, is dropped
/// before this returns.
fn run(cli: Cli) -> i32 {
    let globals = GlobalOptions {
        target: cli.target,
        config: cli.config,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(&globals, args),
        Commands::Uninstall(args) => commands::uninstall::run(&globals, args),
        Commands::List(args) => commands::list::run(&globals, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            print_error(&err);
            err.exit_code()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = run(cli);
    std::process::exit(code);
}
