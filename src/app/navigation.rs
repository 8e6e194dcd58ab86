//! Focus, scrolling, and quitting.

use super::{App, Focus};

impl App {
    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    /// Largest valid scroll offset: the last row stays visible.
    fn max_scroll(&self) -> usize {
        self.rows().len().saturating_sub(1)
    }

    pub fn scroll_up(&mut self, rows: usize) {
        let offset = self.scroll_offset.saturating_sub(rows);
        self.set_scroll(offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let offset = self.scroll_offset.saturating_add(rows).min(self.max_scroll());
        self.set_scroll(offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.set_scroll(0);
    }

    fn set_scroll(&mut self, offset: usize) {
        if self.scroll_offset != offset {
            self.scroll_offset = offset;
            self.mark_dirty();
        }
    }
}
