//! Terminal UI error types.

use thiserror::Error;

/// Terminal-specific error variants.
#[derive(Debug, Clone, Error)]
pub enum UiError {
    /// Terminal initialization failed.
    #[error("Terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    /// Terminal restore failed.
    #[error("Terminal restore failed: {message}")]
    TerminalRestoreFailed { message: String },

    /// Drawing a frame failed.
    #[error("Render failed: {message}")]
    RenderFailed { message: String },

    /// The terminal event stream failed.
    #[error("Input error: {message}")]
    InputError { message: String },
}

impl UiError {
    /// Check if this error is recoverable (UI can continue working).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { .. } => "Failed to draw the product table.".to_string(),
            UiError::InputError { .. } => {
                "Lost the terminal input stream. Please restart the application.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(UiError::RenderFailed {
            message: String::new()
        }
        .is_recoverable());
        assert!(!UiError::InputError {
            message: String::new()
        }
        .is_recoverable());
    }
}
