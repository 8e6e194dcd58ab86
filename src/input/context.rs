//! Input context for deciding how a key is interpreted.

use crate::app::Focus;

/// The slice of application state the registry needs to dispatch a key.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    /// Which control has focus
    pub focus: Focus,
    /// Whether the search text is empty (changes what Esc does)
    pub filter_is_empty: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self {
            focus: Focus::Search,
            filter_is_empty: true,
        }
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_filter_is_empty(mut self, empty: bool) -> Self {
        self.filter_is_empty = empty;
        self
    }
}
