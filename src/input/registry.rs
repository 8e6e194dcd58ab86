//! Command registry for dispatching keyboard input to commands.
//!
//! Priority order:
//! 1. Ctrl+C (always quits)
//! 2. Esc (clears a non-empty search, otherwise quits)
//! 3. Global bindings
//! 4. Focus bindings
//! 5. Printable characters, when the search field has focus

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if key.code == KeyCode::Esc {
            return Some(if context.filter_is_empty {
                Command::Quit
            } else {
                Command::ClearFilter
            });
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_focus(context.focus, &combo) {
            return Some(cmd.clone());
        }

        if context.focus == Focus::Search {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return Some(Command::InsertChar(c));
                }
            }
        }

        None
    }
}
