//! Non-interactive `--print` mode.

use std::io::{self, Write};

use tracing::info;

use crate::cli_output::{write_json, write_table};
use crate::error::ShelfResult;
use crate::startup::StartupConfig;
use crate::view_model::{self, ViewSummary};

/// Build the rows once with the configured criteria and write them to stdout.
pub fn handle_print_command(config: &StartupConfig) -> ShelfResult<()> {
    let catalog = config.load_catalog()?;
    let criteria = config.initial_criteria();
    let rows = view_model::build(catalog.items(), &criteria);
    info!(rows = rows.len(), json = config.json_output, "Printing product table");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json_output {
        write_json(&mut out, &rows)?;
    } else {
        let summary = ViewSummary::from_rows(&rows, catalog.len());
        write_table(&mut out, &rows, &summary)?;
    }
    out.flush()?;
    Ok(())
}
