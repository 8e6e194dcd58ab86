//! CLI module for Shelf.
//!
//! - Argument parsing
//! - Version and help display
//! - Non-interactive `--print` mode
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use shelf::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&args, &config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod help;
pub mod print;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand};
pub use help::{handle_help_command, USAGE};
pub use print::handle_print_command;
pub use version::{handle_version_command, VERSION};

use crate::error::ShelfResult;
use crate::startup::StartupConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(args: &CliArgs, config: &StartupConfig) -> Option<ShelfResult<()>> {
    match args.command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Print => Some(handle_print_command(config)),
        CliCommand::RunTui => None,
    }
}
