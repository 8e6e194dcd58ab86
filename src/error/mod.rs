//! Unified error handling for Shelf.
//!
//! The view-model pipeline itself cannot fail: every filter text and every
//! toggle state is a valid input. Errors only arise at the edges of the
//! application:
//!
//! - **Catalog loading**: reading and validating an external catalog file
//! - **Command line**: unknown flags or missing option values
//! - **Terminal**: setting up, drawing to, or restoring the terminal
//!
//! | Category | Description | Recoverable |
//! |----------|-------------|-------------|
//! | User | Bad arguments or catalog contents | No (fix input) |
//! | System | OS/filesystem errors | No |
//! | Terminal | Terminal setup or drawing | Sometimes |

mod catalog;
mod category;
mod cli;
mod result;
mod shelf_error;
mod ui;

pub use catalog::CatalogError;
pub use category::ErrorCategory;
pub use cli::CliError;
pub use result::ShelfResult;
pub use shelf_error::ShelfError;
pub use ui::UiError;
