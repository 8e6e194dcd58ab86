//! Counts derived from a row sequence.

use super::rows::DisplayRow;

/// What the status line reports about the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSummary {
    pub items_shown: usize,
    pub categories_shown: usize,
    pub items_total: usize,
}

impl ViewSummary {
    pub fn from_rows(rows: &[DisplayRow], items_total: usize) -> Self {
        let categories_shown = rows.iter().filter(|row| row.is_category()).count();
        Self {
            items_shown: rows.len() - categories_shown,
            categories_shown,
            items_total,
        }
    }

    /// Status line text, e.g. "4 of 6 products".
    pub fn label(&self) -> String {
        let noun = if self.items_total == 1 { "product" } else { "products" };
        format!("{} of {} {}", self.items_shown, self.items_total, noun)
    }
}
