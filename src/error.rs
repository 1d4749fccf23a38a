//! Argument errors raised by constructors and add operations
//!
//! Every fallible operation in this crate reports a contract violation as an
//! [`ArgumentError`], returned synchronously from the call that detected it.

use thiserror::Error;

/// A required argument was absent, blank, or violated a contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required value was absent.
    #[error("The {name} argument is required.")]
    Missing {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// A message was present but empty or whitespace only.
    #[error("The {name} argument should be populated and should not just be whitespace.")]
    Blank {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// An error was asked to represent zero issues.
    #[error("The {name} must contain at least one issue.")]
    NoIssues {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// An error was asked to represent a successful operation result.
    #[error("The {name} is successful and does not describe a failure.")]
    Successful {
        /// Name of the offending argument.
        name: &'static str,
    },
}

impl ArgumentError {
    /// Name of the argument that was rejected.
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentError::Missing { name }
            | ArgumentError::Blank { name }
            | ArgumentError::NoIssues { name }
            | ArgumentError::Successful { name } => name,
        }
    }
}

/// Rejects blank messages, returning the owned message otherwise.
pub(crate) fn require_message(
    name: &'static str,
    message: impl Into<String>,
) -> Result<String, ArgumentError> {
    let message = message.into();
    if message.trim().is_empty() {
        return Err(ArgumentError::Blank { name });
    }
    Ok(message)
}
