//! Terminal event handling for the App.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tracing::debug;

use super::App;
use crate::input::handlers::{handle_filter_command, handle_navigation_command};
use crate::input::{Command, InputContext};

impl App {
    /// Handle one terminal event to completion.
    ///
    /// The resulting filter change, if any, is applied to the rows before
    /// this returns.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => self.execute_command(Command::InsertText(text)),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Translate a key press into a command and run it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(cmd) = self.registry.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    /// Run one command, then rebuild the rows if the filter changed.
    pub fn execute_command(&mut self, cmd: Command) {
        debug!(?cmd, "Executing command");

        if cmd.touches_filter() {
            // Controls get the two current values and the setters only.
            let filter_text = self.filter.filter_text().to_owned();
            let in_stock_only = self.filter.in_stock_only();
            handle_filter_command(&cmd, &filter_text, in_stock_only, &mut self.filter);
        } else {
            handle_navigation_command(self, &cmd);
        }

        self.sync_view();
    }

    fn input_context(&self) -> InputContext {
        InputContext::new()
            .with_focus(self.focus)
            .with_filter_is_empty(self.filter.filter_text().is_empty())
    }
}
