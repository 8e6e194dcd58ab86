//! Navigation command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles focus, scroll, and quit commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }

        Command::FocusNext => {
            app.set_focus(app.focus.next());
            true
        }

        Command::FocusPrev => {
            app.set_focus(app.focus.prev());
            true
        }

        Command::ScrollUp(rows) => {
            app.scroll_up(*rows);
            true
        }

        Command::ScrollDown(rows) => {
            app.scroll_down(*rows);
            true
        }

        Command::ScrollToTop => {
            app.scroll_to_top();
            true
        }

        _ => false,
    }
}
