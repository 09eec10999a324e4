use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List skills and their installed state:\n    skilldeploy list\n\n\
                  Inspect another skills directory:\n    skilldeploy list --target ./skills")]
pub struct ListArgs {}
