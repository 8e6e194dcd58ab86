//! Result type alias for Shelf operations.

use super::shelf_error::ShelfError;

/// Type alias for Results using ShelfError.
pub type ShelfResult<T> = Result<T, ShelfError>;
