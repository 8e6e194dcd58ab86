//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Focus;

/// Rows moved by PageUp / PageDown.
pub const PAGE_ROWS: usize = 10;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per focused control
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            focus: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_focus_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::ResetFilters);
        self.global.insert(
            KeyCombo::ctrl(KeyCode::Char('s')),
            Command::ToggleInStockOnly,
        );

        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        // Terminals report Shift+Tab as BackTab, some with the Shift bit set
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);

        self.global
            .insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        self.global
            .insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        self.global.insert(
            KeyCombo::plain(KeyCode::PageUp),
            Command::ScrollUp(PAGE_ROWS),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::PageDown),
            Command::ScrollDown(PAGE_ROWS),
        );
        self.global
            .insert(KeyCombo::plain(KeyCode::Home), Command::ScrollToTop);
    }

    fn setup_focus_bindings(&mut self) {
        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::DeleteBackward);
        search.insert(
            KeyCombo::ctrl(KeyCode::Char('w')),
            Command::DeleteWordBackward,
        );
        search.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearFilter);
        self.focus.insert(Focus::Search, search);

        let mut toggle = HashMap::new();
        toggle.insert(
            KeyCombo::plain(KeyCode::Char(' ')),
            Command::ToggleInStockOnly,
        );
        toggle.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleInStockOnly);
        self.focus.insert(Focus::StockToggle, toggle);
    }

    /// Gets the global command for a key combo.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Gets the focus-specific command for a key combo.
    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus).and_then(|m| m.get(combo))
    }
}
