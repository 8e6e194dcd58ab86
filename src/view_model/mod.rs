//! View model for the product table.
//!
//! Rendering is a pure function of the rows built here:
//!
//! ```text
//! catalog + FilterCriteria
//!          │ build()
//!          ▼
//!   Vec<DisplayRow>  ──► ui / cli_output
//! ```
//!
//! - [`DisplayRow`]: a category header or an item, with its display emphasis
//! - [`build`]: single linear pass that filters and emits category headers
//! - [`ViewSummary`]: counts shown in the status line

mod builder;
mod rows;
mod summary;

pub use builder::build;
pub use rows::DisplayRow;
pub use summary::ViewSummary;
