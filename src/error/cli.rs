//! Command-line parsing errors.

use thiserror::Error;

/// Error type for command-line argument parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// A flag the program does not recognize
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    /// An option that requires a value was last on the command line
    #[error("Missing value for {0}")]
    MissingValue(String),
}
