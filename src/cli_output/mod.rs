//! Plain-text and JSON output for `--print`.
//!
//! A second rendering host for the same rows the TUI draws.

mod table;

pub use table::{render_table, write_json, write_table};
