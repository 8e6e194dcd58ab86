//! Filter state: the text query and the in-stock-only flag.
//!
//! `FilterState` is the single owner of the criteria. Controls never see it
//! directly; they read the two current values and write through
//! [`FilterSetters`]. Each setter flags a pending change that the host
//! collects with [`FilterState::take_change`], so several setter calls made
//! while handling one user action produce a single rebuild.

use tracing::debug;

/// The read side of the filter: the two criteria that decide item visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against item names
    pub filter_text: String,
    /// Hide items that are not stocked
    pub in_stock_only: bool,
}

impl FilterCriteria {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }
}

/// Narrow mutation interface handed to input controls.
pub trait FilterSetters {
    /// Replace the search text as-is (no trimming).
    fn set_filter_text(&mut self, text: String);

    /// Replace the in-stock-only flag.
    fn set_in_stock_only(&mut self, flag: bool);
}

/// Mutable filter state owned by the presentation host.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    criteria: FilterCriteria,
    /// Incremented on every setter call
    revision: u64,
    /// Set by setters, cleared by `take_change`
    pending: bool,
}

impl FilterState {
    /// Create a filter state with empty text and the flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter state seeded with initial criteria.
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            revision: 0,
            pending: false,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filter_text(&self) -> &str {
        &self.criteria.filter_text
    }

    pub fn in_stock_only(&self) -> bool {
        self.criteria.in_stock_only
    }

    /// Number of setter calls so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a setter has run since the last `take_change`.
    pub fn has_pending_change(&self) -> bool {
        self.pending
    }

    /// Consume the pending-change flag.
    ///
    /// Returns true exactly once after any number of setter calls.
    pub fn take_change(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
        self.pending = true;
    }
}

impl FilterSetters for FilterState {
    fn set_filter_text(&mut self, text: String) {
        debug!(filter_text = %text, "Filter text changed");
        self.criteria.filter_text = text;
        self.mark_changed();
    }

    fn set_in_stock_only(&mut self, flag: bool) {
        debug!(in_stock_only = flag, "In-stock-only changed");
        self.criteria.in_stock_only = flag;
        self.mark_changed();
    }
}
