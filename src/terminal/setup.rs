//! Terminal setup and teardown functions.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables bracketed paste (a paste arrives as one event)
/// - Hides the hardware cursor (the search field draws its own)
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste, Hide)
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal from a panic or fatal error path.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
