//! Unified error type for the Shelf application.

use thiserror::Error;

use super::catalog::CatalogError;
use super::category::ErrorCategory;
use super::cli::CliError;
use super::ui::UiError;

/// Unified error type for the Shelf application.
///
/// Consolidates the domain errors so the binary can categorize a failure,
/// choose an exit code, and show a friendly message.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Catalog loading or validation errors.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Command-line parsing errors.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Terminal errors.
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Filesystem and other OS errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShelfError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShelfError::Catalog(CatalogError::Read { .. }) => ErrorCategory::System,
            ShelfError::Catalog(_) | ShelfError::Cli(_) => ErrorCategory::User,
            ShelfError::Ui(_) => ErrorCategory::Terminal,
            ShelfError::Io(_) => ErrorCategory::System,
        }
    }

    /// Whether the interactive session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ShelfError::Ui(err) => err.is_recoverable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ShelfError::Catalog(err) => err.user_message(),
            ShelfError::Cli(err) => err.to_string(),
            ShelfError::Ui(err) => err.user_message(),
            ShelfError::Io(err) => format!("A system error occurred: {}", err),
        }
    }
}
