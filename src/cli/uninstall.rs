use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick skills to remove from a menu:\n    skilldeploy uninstall\n\n\
                  Remove specific skills:\n    skilldeploy uninstall code-review\n\n\
                  Remove every skill without confirmation:\n    skilldeploy uninstall --all -y")]
pub struct UninstallArgs {
    /// Skills to remove. If not provided, shows a menu
    #[arg(value_name = "SKILL")]
    pub names: Vec<String>,

    /// Remove every known skill (asks for confirmation)
    #[arg(long, short = 'a', conflicts_with = "names")]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Run the removal inside WSL instead of natively
    #[arg(long)]
    pub wsl: bool,
}

impl UninstallArgs {
    /// Arguments for re-running this removal inside WSL
    pub fn bridge_args(&self, verbose: bool) -> Vec<String> {
        let mut args = vec!["uninstall".to_string()];
        args.extend(self.names.iter().cloned());
        let flags = [(self.all, "--all"), (self.yes, "--yes"), (verbose, "--verbose")];
        args.extend(flags.iter().filter(|(on, _)| *on).map(|(_, f)| f.to_string()));
        args
    }
}
