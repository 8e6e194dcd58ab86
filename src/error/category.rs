//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (bad arguments, invalid catalog contents).
    User,

    /// System/OS errors (filesystem, permissions).
    System,

    /// Terminal setup, drawing, or input errors.
    Terminal,
}

impl ErrorCategory {
    /// Process exit code used when an error of this category ends the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::User => 2,
            ErrorCategory::System | ErrorCategory::Terminal => 1,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Terminal => "terminal",
        };
        write!(f, "{}", name)
    }
}
