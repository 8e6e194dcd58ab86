//! Filter control handlers.
//!
//! These handlers are the input controls: they see the current search text
//! and checkbox value, compute the new value, and hand it to the setters.
//! They never touch the filter state or the application directly.

use crate::input::Command;
use crate::state::FilterSetters;

/// Handles commands for the search field and the stock checkbox.
///
/// Returns `true` if the command was a filter command. Every filter command
/// makes exactly one setter call, except `ResetFilters` which makes two.
pub fn handle_filter_command(
    cmd: &Command,
    filter_text: &str,
    in_stock_only: bool,
    setters: &mut dyn FilterSetters,
) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            let mut text = filter_text.to_owned();
            text.push(*c);
            setters.set_filter_text(text);
            true
        }

        Command::InsertText(pasted) => {
            // Single-line field: newlines from a paste become spaces
            let cleaned: String = pasted
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            setters.set_filter_text(format!("{}{}", filter_text, cleaned));
            true
        }

        Command::DeleteBackward => {
            let mut text = filter_text.to_owned();
            text.pop();
            setters.set_filter_text(text);
            true
        }

        Command::DeleteWordBackward => {
            setters.set_filter_text(delete_last_word(filter_text).to_owned());
            true
        }

        Command::ClearFilter => {
            setters.set_filter_text(String::new());
            true
        }

        Command::ToggleInStockOnly => {
            setters.set_in_stock_only(!in_stock_only);
            true
        }

        Command::ResetFilters => {
            setters.set_filter_text(String::new());
            setters.set_in_stock_only(false);
            true
        }

        _ => false,
    }
}

/// Text left after removing trailing whitespace and then the last word.
fn delete_last_word(text: &str) -> &str {
    let trimmed = text.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(idx) => {
            let ws_len = trimmed[idx..].chars().next().map_or(1, char::len_utf8);
            &trimmed[..idx + ws_len]
        }
        None => "",
    }
}
