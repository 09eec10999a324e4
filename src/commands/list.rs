//! List command implementation

use crate::cli::ListArgs;
use crate::config::Overrides;
use crate::error::Result;
use crate::operations::ListOperation;
use crate::ui::Reporter;

use super::GlobalOptions;

/// Run the list command
pub fn run(globals: &GlobalOptions, _args: ListArgs) -> Result<i32> {
    let settings = globals.settings(Overrides::default())?;
    ListOperation::execute(&settings, &Reporter::new());
    Ok(0)
}
