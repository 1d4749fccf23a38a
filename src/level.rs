//! Severity levels for validation issues
//!
//! Every [`ValidationIssue`](crate::ValidationIssue) carries an [`IssueLevel`].
//! Levels are ordered, `Warning < Error`, and only [`IssueLevel::Error`]
//! blocks an operation from being considered successful.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::IssueLevel;
//!
//! assert!(IssueLevel::Error > IssueLevel::Warning);
//! assert!(IssueLevel::Error.is_blocking());
//! assert!(!IssueLevel::Warning.is_blocking());
//! assert_eq!(IssueLevel::Warning.to_string(), "Warning");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How severe a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueLevel {
    /// Does not block the consumer from performing the action, but points at
    /// something the consumer could improve.
    Warning = 1,

    /// Blocks the consumer from performing the action. This is the common
    /// level of a validation issue.
    Error = 2,
}

impl IssueLevel {
    /// Returns `true` if an issue at this level makes an operation unsuccessful.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::IssueLevel;
    ///
    /// assert!(IssueLevel::Error.is_blocking());
    /// ```
    #[inline]
    pub fn is_blocking(self) -> bool {
        self > IssueLevel::Warning
    }

    /// The name of the level as it appears in rendered messages.
    pub fn as_str(self) -> &'static str {
        match self {
            IssueLevel::Warning => "Warning",
            IssueLevel::Error => "Error",
        }
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
