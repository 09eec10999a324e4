use std::path::PathBuf;

use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick skills from a numbered menu:\n    skilldeploy install\n\n\
                   Install everything:\n    skilldeploy install --all\n\n\
                   Install specific skills:\n    skilldeploy install code-review ux-psychology\n\n\
                   Install from a local checkout:\n    skilldeploy install --source ./skill-bundles\n\n\
                   Install inside WSL (Windows):\n    skilldeploy install --all --wsl\n\n\
                   Answer the menu from a pipe:\n    echo 1,3 | skilldeploy install")]
pub struct InstallArgs {
    /// Skills to install. If not provided, shows a menu
    #[arg(value_name = "SKILL")]
    pub names: Vec<String>,

    /// Install every known skill without prompting
    #[arg(long, short = 'a', conflicts_with = "names")]
    pub all: bool,

    /// Run the installation inside WSL instead of natively
    #[arg(long)]
    pub wsl: bool,

    /// Local checkout of the skill catalog to install from
    #[arg(long, short = 's', value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Git repository fetched when no local checkout is found
    #[arg(long, env = "SKILLDEPLOY_REPOSITORY", value_name = "URL")]
    pub repo: Option<String>,

    /// Branch of the repository to fetch
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Do not run package managers inside installed skills
    #[arg(long)]
    pub skip_deps: bool,

    /// Never offer to install missing tools
    #[arg(long)]
    pub no_auto_install: bool,

    /// Accept offers to install missing tools without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl InstallArgs {
    /// Arguments for re-running this install inside WSL
    ///
    /// Host-local paths are not forwarded.
    pub fn bridge_args(&self, verbose: bool) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        args.extend(self.names.iter().cloned());
        let flags = [
            (self.all, "--all"),
            (self.yes, "--yes"),
            (self.skip_deps, "--skip-deps"),
            (self.no_auto_install, "--no-auto-install"),
            (verbose, "--verbose"),
        ];
        args.extend(flags.iter().filter(|(on, _)| *on).map(|(_, f)| f.to_string()));
        if let Some(ref repo) = self.repo {
            args.extend(["--repo".to_string(), repo.clone()]);
        }
        if let Some(ref branch) = self.branch {
            args.extend(["--branch".to_string(), branch.clone()]);
        }
        args
    }
}
