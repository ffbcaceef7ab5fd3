//! Command implementations for trigger-workflow.
//!
//! There is a single command: dispatch the fixed workflow once.

mod trigger;

pub use trigger::cmd_trigger;

use crate::cli::Cli;
use crate::error::Result;

/// Run the command selected by `cli`.
pub fn dispatch(_cli: Cli) -> Result<()> {
    cmd_trigger()
}
