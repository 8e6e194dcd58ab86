//! Command definitions for keyboard input handling.

/// Every user action the product table understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C, Esc with an empty search)
    Quit,
    /// Clear the search text and turn off in-stock-only (Ctrl+R)
    ResetFilters,
    /// Flip in-stock-only from any focus (Ctrl+S)
    ToggleInStockOnly,

    // =========================================================================
    // Search field
    // =========================================================================
    /// Append a typed character
    InsertChar(char),
    /// Append pasted text
    InsertText(String),
    /// Remove the last character (Backspace)
    DeleteBackward,
    /// Remove the last word (Ctrl+W)
    DeleteWordBackward,
    /// Empty the search text (Ctrl+U, Esc with text)
    ClearFilter,

    // =========================================================================
    // Focus and scrolling
    // =========================================================================
    /// Move focus to the next control (Tab)
    FocusNext,
    /// Move focus to the previous control (Shift+Tab)
    FocusPrev,
    /// Scroll the table up by rows
    ScrollUp(usize),
    /// Scroll the table down by rows
    ScrollDown(usize),
    /// Jump to the first row (Home)
    ScrollToTop,
}

impl Command {
    /// Whether the command goes through the filter setters.
    pub fn touches_filter(&self) -> bool {
        matches!(
            self,
            Command::ResetFilters
                | Command::ToggleInStockOnly
                | Command::InsertChar(_)
                | Command::InsertText(_)
                | Command::DeleteBackward
                | Command::DeleteWordBackward
                | Command::ClearFilter
        )
    }
}
