//! Type definitions for the application state.

/// Which control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// The search text field
    #[default]
    Search,
    /// The "only show products in stock" checkbox
    StockToggle,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::StockToggle,
            Focus::StockToggle => Focus::Search,
        }
    }

    // Two controls, so previous and next coincide.
    pub fn prev(self) -> Self {
        self.next()
    }
}
