//! State owned by the presentation host.

pub mod filter;

pub use filter::{FilterCriteria, FilterSetters, FilterState};
