//! Usage text.

pub const USAGE: &str = "\
Usage: shelf [OPTIONS]

Browse a product catalog, filtered by name and stock.

Options:
  --catalog <PATH>  Load products from a JSON file instead of the sample
  --filter <TEXT>   Start with this search text
  --in-stock        Start with \"only show products in stock\" checked
  --print           Print the filtered table and exit
  --json            With --print, emit rows as JSON
  -V, --version     Print version
  -h, --help        Print this help

Environment:
  SHELF_CATALOG     Default for --catalog
  SHELF_LOG         Log filter (e.g. debug); logging is off when unset
  SHELF_LOG_FILE    Log file path for the interactive UI
";

/// Handle the --help command.
pub fn handle_help_command() {
    print!("{}", USAGE);
}
