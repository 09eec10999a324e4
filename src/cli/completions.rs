use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skilldeploy completions bash > ~/.bash_completion.d/skilldeploy\n\n\
                  Generate zsh completions:\n    skilldeploy completions zsh > ~/.zfunc/_skilldeploy\n\n\
                  Generate fish completions:\n    skilldeploy completions fish > ~/.config/fish/completions/skilldeploy.fish\n\n\
                  Generate PowerShell completions:\n    skilldeploy completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
