//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into TUI mode when created and
//! restores it when dropped, whether the app exits normally or unwinds.
//!
//! ```no_run
//! use shelf::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> shelf::error::ShelfResult<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw frames ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{ShelfResult, UiError};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the interactive session.
///
/// Install the panic hook with `setup_panic_hook()` before creating this,
/// so a panic also leaves the terminal usable.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen, and clear it.
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalInitFailed` if any step fails; whatever was
    /// already enabled is rolled back.
    pub fn new() -> ShelfResult<Self> {
        let init_failed = |err: io::Error| UiError::TerminalInitFailed {
            message: err.to_string(),
        };

        enable_raw_mode().map_err(init_failed)?;
        // From here on the guard undoes raw mode if a later step fails.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> ShelfResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|err| UiError::TerminalRestoreFailed {
                message: err.to_string(),
            })?;
        Ok(())
    }
}

/// Outcome of an interactive session once the terminal has been restored.
///
/// The session's own error wins; a restore error is reported only when the
/// session ended cleanly.
pub fn session_outcome(session: ShelfResult<()>, restored: ShelfResult<()>) -> ShelfResult<()> {
    session.and(restored)
}
