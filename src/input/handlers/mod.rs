//! Command handlers.
//!
//! - [`filter`] - the search field and the in-stock checkbox
//! - [`navigation`] - focus, scrolling, and quitting

pub mod filter;
pub mod navigation;

pub use filter::handle_filter_command;
pub use navigation::handle_navigation_command;
