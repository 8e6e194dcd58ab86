//! Command-line argument parsing for Shelf CLI.

use std::path::PathBuf;

use crate::error::CliError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the filtered table to stdout and exit
    Print,
    /// Run the TUI application (default)
    #[default]
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--catalog <PATH>`
    pub catalog: Option<PathBuf>,
    /// `--filter <TEXT>`
    pub filter: Option<String>,
    /// `--in-stock`
    pub in_stock: bool,
    /// `--json` (only meaningful with `--print`)
    pub json: bool,
}

/// Parse command-line arguments.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use shelf::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["shelf".to_string(), "--print".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Print);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                return Ok(parsed);
            }
            "--help" | "-h" => {
                parsed.command = CliCommand::Help;
                return Ok(parsed);
            }
            "--print" => parsed.command = CliCommand::Print,
            "--json" => parsed.json = true,
            "--in-stock" => parsed.in_stock = true,
            "--catalog" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.catalog = Some(PathBuf::from(value));
            }
            "--filter" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.filter = Some(value);
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(parsed)
}
