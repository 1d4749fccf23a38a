//! Validation issues
//!
//! A [`ValidationIssue`] is one reported problem: a non-blank message, a
//! severity [`IssueLevel`], an optional machine-readable code, and an optional
//! set of member (field) names the problem relates to.
//!
//! Issues are immutable values. Every `with_*` method returns a new issue with
//! exactly one field replaced and leaves the original untouched. Equality and
//! hashing are structural, so two issues built from the same parts collapse to
//! one entry when stored in an issue set.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::{IssueLevel, ValidationIssue};
//!
//! let issue = ValidationIssue::error("Name is required")?
//!     .with_code("name.required")
//!     .with_member_names(["Name"]);
//!
//! assert_eq!(issue.level(), IssueLevel::Error);
//! assert_eq!(issue.code(), Some("name.required"));
//! assert_eq!(issue.to_string(), "Member(s): Name\nError Message: Name is required");
//! # Ok::<(), validation_outcome::ArgumentError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{require_message, ArgumentError};
use crate::level::IssueLevel;

/// The member (field) names an issue relates to.
///
/// Insertion ordered, so rendered messages list names in the order they were
/// supplied. Equality ignores order.
pub type MemberNames = IndexSet<String>;

/// One reported validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationIssue {
    pub(crate) message: String,
    pub(crate) level: IssueLevel,
    pub(crate) code: Option<String>,
    pub(crate) member_names: Option<MemberNames>,
}

impl ValidationIssue {
    /// Create an issue with the given message and level.
    ///
    /// Fails with [`ArgumentError::Blank`] if the message is empty or only
    /// whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{ArgumentError, IssueLevel, ValidationIssue};
    ///
    /// let issue = ValidationIssue::new("Too long", IssueLevel::Warning).unwrap();
    /// assert_eq!(issue.message(), "Too long");
    ///
    /// let err = ValidationIssue::new("   ", IssueLevel::Error).unwrap_err();
    /// assert_eq!(err, ArgumentError::Blank { name: "message" });
    /// ```
    pub fn new(message: impl Into<String>, level: IssueLevel) -> Result<Self, ArgumentError> {
        Ok(ValidationIssue {
            message: require_message("message", message)?,
            level,
            code: None,
            member_names: None,
        })
    }

    /// Create an [`IssueLevel::Error`] issue.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{IssueLevel, ValidationIssue};
    ///
    /// let issue = ValidationIssue::error("Foo is empty").unwrap();
    /// assert_eq!(issue.level(), IssueLevel::Error);
    /// ```
    pub fn error(message: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::new(message, IssueLevel::Error)
    }

    /// Create an [`IssueLevel::Warning`] issue.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{IssueLevel, ValidationIssue};
    ///
    /// let issue = ValidationIssue::warning("Foo looks odd").unwrap();
    /// assert_eq!(issue.level(), IssueLevel::Warning);
    /// ```
    pub fn warning(message: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::new(message, IssueLevel::Warning)
    }

    /// The human-readable description of the problem. Never blank.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity of the problem.
    pub fn level(&self) -> IssueLevel {
        self.level
    }

    /// Optional machine-readable identifier.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The member names this issue relates to, if any were supplied.
    pub fn member_names(&self) -> Option<&MemberNames> {
        self.member_names.as_ref()
    }

    /// Returns `true` if this issue makes an operation unsuccessful.
    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.level.is_blocking()
    }

    /// Returns a copy with the message replaced.
    ///
    /// The new message is validated the same way as at construction.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::ValidationIssue;
    ///
    /// let original = ValidationIssue::error("before").unwrap();
    /// let renamed = original.with_message("after").unwrap();
    ///
    /// assert_eq!(original.message(), "before");
    /// assert_eq!(renamed.message(), "after");
    /// assert!(original.with_message("").is_err());
    /// ```
    pub fn with_message(&self, message: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(ValidationIssue {
            message: require_message("message", message)?,
            ..self.clone()
        })
    }

    /// Returns a copy with the level replaced.
    pub fn with_level(&self, level: IssueLevel) -> Self {
        ValidationIssue {
            level,
            ..self.clone()
        }
    }

    /// Returns a copy with the code replaced.
    ///
    /// Any string is accepted, including an empty one.
    pub fn with_code(&self, code: impl Into<String>) -> Self {
        ValidationIssue {
            code: Some(code.into()),
            ..self.clone()
        }
    }

    /// Returns a copy with the code cleared.
    pub fn without_code(&self) -> Self {
        ValidationIssue {
            code: None,
            ..self.clone()
        }
    }

    /// Returns a copy with the member names replaced.
    ///
    /// An empty set is accepted and kept as an empty set.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::ValidationIssue;
    ///
    /// let issue = ValidationIssue::error("Mismatch")
    ///     .unwrap()
    ///     .with_member_names(["Password", "Confirmation"]);
    ///
    /// let names: Vec<&str> = issue
    ///     .member_names()
    ///     .unwrap()
    ///     .iter()
    ///     .map(String::as_str)
    ///     .collect();
    /// assert_eq!(names, ["Password", "Confirmation"]);
    /// ```
    pub fn with_member_names<I, S>(&self, member_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationIssue {
            member_names: Some(member_names.into_iter().map(Into::into).collect()),
            ..self.clone()
        }
    }

    /// Returns a copy with the member names cleared.
    pub fn without_member_names(&self) -> Self {
        ValidationIssue {
            member_names: None,
            ..self.clone()
        }
    }
}

impl Hash for ValidationIssue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
        self.level.hash(state);
        self.code.hash(state);

        // Equality on member names ignores order, so the hash must too.
        match &self.member_names {
            None => state.write_u8(0),
            Some(names) => {
                state.write_u8(1);
                let mut sorted: Vec<&String> = names.iter().collect();
                sorted.sort_unstable();
                sorted.hash(state);
            }
        }
    }
}

/// Renders the issue as a single message block:
///
/// ```text
/// Member(s): Foo, Bar
/// Error Message: Foo is empty
/// ```
///
/// The `Member(s)` line is omitted when there are no member names, or when the
/// joined names are only whitespace.
impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(names) = &self.member_names {
            let joined = names
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");

            if !joined.trim().is_empty() {
                writeln!(f, "Member(s): {}", joined)?;
            }
        }

        write!(f, "{} Message: {}", self.level, self.message)
    }
}
