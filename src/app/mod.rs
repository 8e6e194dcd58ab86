//! Application state and logic for the TUI.
//!
//! [`App`] is the presentation host. It owns the catalog, the
//! [`FilterState`], and the rows currently on screen, and it is the single
//! subscriber to filter changes: after every input event it checks for a
//! pending change and rebuilds the rows synchronously, once, before the next
//! event is looked at. Frames are only drawn from rows built this way, so an
//! older filtered set can never be drawn after a newer one.

mod handlers;
mod navigation;
mod types;

pub use types::Focus;

use tracing::debug;

use crate::input::CommandRegistry;
use crate::models::Catalog;
use crate::state::{FilterCriteria, FilterState};
use crate::view_model::{self, DisplayRow, ViewSummary};

/// Main application state
pub struct App {
    /// Products, read-only for the session
    catalog: Catalog,
    /// Search text and in-stock flag
    filter: FilterState,
    /// Rows built from `catalog` and `filter`
    rows: Vec<DisplayRow>,
    /// Number of times `rows` has been rebuilt
    rebuild_count: u64,
    /// Key to command mapping
    registry: CommandRegistry,
    /// Which control receives typed input
    pub focus: Focus,
    /// First table row shown
    pub scroll_offset: usize,
    /// Set when something visible changed; cleared after drawing
    pub needs_redraw: bool,
    /// Set by the quit command; the event loop exits when true
    pub should_quit: bool,
}

impl App {
    /// Create an app with empty filter criteria.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_filter(catalog, FilterCriteria::default())
    }

    /// Create an app with initial filter criteria.
    pub fn with_filter(catalog: Catalog, criteria: FilterCriteria) -> Self {
        let filter = FilterState::with_criteria(criteria);
        let rows = view_model::build(catalog.items(), filter.criteria());
        debug!(
            items = catalog.len(),
            rows = rows.len(),
            "Built initial product table"
        );

        Self {
            catalog,
            filter,
            rows,
            rebuild_count: 1,
            registry: CommandRegistry::new(),
            focus: Focus::default(),
            scroll_offset: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary::from_rows(&self.rows, self.catalog.len())
    }

    /// Times the rows have been built, including the initial build.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Rebuild the rows if the filter changed since the last call.
    ///
    /// Returns true if a rebuild happened.
    pub fn sync_view(&mut self) -> bool {
        if !self.filter.take_change() {
            return false;
        }

        self.rows = view_model::build(self.catalog.items(), self.filter.criteria());
        self.rebuild_count += 1;
        self.scroll_offset = 0;
        self.mark_dirty();

        debug!(
            revision = self.filter.revision(),
            rows = self.rows.len(),
            "Rebuilt product table"
        );
        true
    }
}
