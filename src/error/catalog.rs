//! Catalog loading and validation errors.
//!
//! The filtering pipeline assumes well-formed items. These errors are raised
//! at the boundary where an external catalog is read, before any item reaches
//! the view model.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for reading and validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog contents are not a JSON array of items
    #[error("Failed to parse catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// An item has an empty category label
    #[error("Item {index} has an empty category")]
    EmptyCategory { index: usize },

    /// An item has an empty name
    #[error("Item {index} has an empty name")]
    EmptyName { index: usize },

    /// Two items share a name (names identify rows)
    #[error("Duplicate item name: {name}")]
    DuplicateName { name: String },
}

impl CatalogError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Read { path, .. } => {
                format!("Could not read catalog file {}.", path.display())
            }
            CatalogError::Parse { .. } => {
                "The catalog file is not a valid JSON list of products.".to_string()
            }
            CatalogError::EmptyCategory { index } => {
                format!("Product #{} is missing a category.", index + 1)
            }
            CatalogError::EmptyName { index } => {
                format!("Product #{} is missing a name.", index + 1)
            }
            CatalogError::DuplicateName { name } => {
                format!("The product name \"{}\" appears more than once.", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_one_based() {
        let err = CatalogError::EmptyName { index: 0 };
        assert_eq!(err.user_message(), "Product #1 is missing a name.");
    }

    #[test]
    fn test_display_includes_name() {
        let err = CatalogError::DuplicateName {
            name: "Peas".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate item name: Peas");
    }
}
