//! Escalating validation issues into an error
//!
//! [`OperationResultError`] is the one type in this crate meant to travel
//! through `?` as a failure. It wraps a non-empty set of issues (normalized
//! into an [`OperationResult`]) and renders them into a human-readable message
//! once, at construction.
//!
//! # Message format
//!
//! Each issue renders as one block:
//!
//! ```text
//! Member(s): Foo, Bar
//! Error Message: Foo is empty
//! ```
//!
//! The `Member(s)` line only appears when the issue has member names. Blocks
//! for multiple issues are joined with a blank line, in the iteration order of
//! the result's issue set (the order in which distinct issues were added).
//!
//! # Examples
//!
//! ```
//! use validation_outcome::{OperationResultError, ValidationIssue};
//!
//! let err = OperationResultError::from_issue(
//!     ValidationIssue::error("Foo is beyond all reason.").unwrap(),
//! );
//! assert_eq!(err.to_string(), "Error Message: Foo is beyond all reason.");
//! assert_eq!(err.result().len(), 1);
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::error::ArgumentError;
use crate::issue::ValidationIssue;
use crate::result::OperationResult;

type Source = Box<dyn StdError + Send + Sync + 'static>;

/// An error describing at least one validation issue.
pub struct OperationResultError {
    result: OperationResult,
    message: String,
    source: Option<Source>,
}

impl OperationResultError {
    /// Wrap a non-empty collection of issues.
    ///
    /// Duplicate issues collapse, as they would in an [`OperationResult`].
    /// Fails with [`ArgumentError::NoIssues`] if `issues` is empty. Unlike
    /// [`from_result`](Self::from_result), a collection holding only warnings
    /// is accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{ArgumentError, OperationResultError, ValidationIssue};
    ///
    /// let err = OperationResultError::from_issues([
    ///     ValidationIssue::error("X").unwrap().with_member_names(["Foo", "Bar"]),
    /// ])
    /// .unwrap();
    /// assert_eq!(err.to_string(), "Member(s): Foo, Bar\nError Message: X");
    ///
    /// let empty = OperationResultError::from_issues(Vec::new()).unwrap_err();
    /// assert_eq!(empty, ArgumentError::NoIssues { name: "issues" });
    /// ```
    pub fn from_issues<I>(issues: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        let result: OperationResult = OperationResult::from_issues(issues);
        if result.is_empty() {
            return Err(ArgumentError::NoIssues { name: "issues" });
        }
        Ok(Self::escalate(result))
    }

    /// Wrap an unsuccessful result. Its payload, if any, is dropped.
    ///
    /// Fails with [`ArgumentError::Successful`] if the result is successful,
    /// which includes results that are empty or hold only warnings.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{ArgumentError, OperationResult, OperationResultError};
    ///
    /// let failed = OperationResult::success().add_error("Broken").unwrap();
    /// let err = OperationResultError::from_result(&failed).unwrap();
    /// assert_eq!(err.result(), &failed);
    ///
    /// let rejected = OperationResultError::from_result(OperationResult::success()).unwrap_err();
    /// assert_eq!(rejected, ArgumentError::Successful { name: "result" });
    /// ```
    pub fn from_result<T>(result: &OperationResult<T>) -> Result<Self, ArgumentError> {
        if result.is_successful() {
            return Err(ArgumentError::Successful { name: "result" });
        }
        Ok(Self::escalate(result.without_value()))
    }

    /// Wrap exactly one issue.
    pub fn from_issue(issue: ValidationIssue) -> Self {
        Self::escalate(OperationResult::from_issues([issue]))
    }

    /// Attach the error that caused this one.
    ///
    /// # Example
    ///
    /// ```
    /// use std::error::Error;
    /// use validation_outcome::{OperationResultError, ValidationIssue};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    /// let err = OperationResultError::from_issue(ValidationIssue::error("Missing config").unwrap())
    ///     .with_source(io);
    ///
    /// assert_eq!(err.source().unwrap().to_string(), "config.toml");
    /// ```
    pub fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The wrapped result, for inspecting individual issues after catching.
    pub fn result(&self) -> &OperationResult {
        &self.result
    }

    /// Consume the error and return the wrapped result.
    pub fn into_result(self) -> OperationResult {
        self.result
    }

    /// The rendered message, as computed at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Callers guarantee `result` holds at least one issue.
    pub(crate) fn escalate(result: OperationResult) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            issues = result.len(),
            errors = result.errors().count(),
            "escalating validation issues into an error"
        );

        let message = render_message(&result);
        OperationResultError {
            result,
            message,
            source: None,
        }
    }
}

fn render_message(result: &OperationResult) -> String {
    result
        .issues()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl From<ValidationIssue> for OperationResultError {
    fn from(issue: ValidationIssue) -> Self {
        Self::from_issue(issue)
    }
}

impl fmt::Debug for OperationResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationResultError")
            .field("message", &self.message)
            .field("result", &self.result)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for OperationResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for OperationResultError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IssueLevel;

    #[test]
    fn test_single_issue_message() {
        let err = OperationResultError::from_issues([
            ValidationIssue::error("Foo is beyond all reason.").unwrap()
        ])
        .unwrap();

        assert_eq!(err.to_string(), "Error Message: Foo is beyond all reason.");
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn test_single_warning_message() {
        let err = OperationResultError::from_issue(ValidationIssue::warning("Hmm").unwrap());
        assert_eq!(err.to_string(), "Warning Message: Hmm");
    }

    #[test]
    fn test_single_issue_with_members() {
        let err = OperationResultError::from_issue(
            ValidationIssue::error("Foo is beyond all reason.")
                .unwrap()
                .with_member_names(["Foo", "Bar"]),
        );

        assert_eq!(
            err.to_string(),
            "Member(s): Foo, Bar\nError Message: Foo is beyond all reason."
        );
    }

    #[test]
    fn test_multiple_issues_joined_by_blank_line() {
        let err = OperationResultError::from_issues([
            ValidationIssue::error("Foo is beyond all reason.")
                .unwrap()
                .with_member_names(["Foo", "Bar"]),
            ValidationIssue::warning("What is Kung Fu Fighting?").unwrap(),
        ])
        .unwrap();

        assert_eq!(
            err.to_string(),
            "Member(s): Foo, Bar\nError Message: Foo is beyond all reason.\n\n\
             Warning Message: What is Kung Fu Fighting?"
        );
    }

    #[test]
    fn test_empty_issues_rejected() {
        let err = OperationResultError::from_issues(std::iter::empty()).unwrap_err();
        assert_eq!(err, ArgumentError::NoIssues { name: "issues" });
    }

    #[test]
    fn test_successful_result_rejected() {
        let warned = OperationResult::with_value(1).add_warning("w").unwrap();

        assert_eq!(
            OperationResultError::from_result(&warned).unwrap_err(),
            ArgumentError::Successful { name: "result" }
        );
        assert!(OperationResultError::from_result(OperationResult::success()).is_err());
    }

    #[test]
    fn test_warning_only_issue_set_accepted() {
        let err = OperationResultError::from_issues([ValidationIssue::warning("w").unwrap()]);
        assert!(err.is_ok());
    }

    #[test]
    fn test_from_result_exposes_issues() {
        let failed = OperationResult::with_value("payload")
            .add_error("e")
            .unwrap()
            .add_warning("w")
            .unwrap();

        let err = OperationResultError::from_result(&failed).unwrap();
        assert!(err.result().shares_issues_with(&failed));
        assert_eq!(err.result().value(), None);
        assert_eq!(
            err.into_result()
                .issues()
                .map(ValidationIssue::level)
                .collect::<Vec<_>>(),
            [IssueLevel::Error, IssueLevel::Warning]
        );
    }

    #[test]
    fn test_duplicates_collapse_in_message() {
        let issue = ValidationIssue::error("Same").unwrap();
        let err = OperationResultError::from_issues([issue.clone(), issue]).unwrap();
        assert_eq!(err.to_string(), "Error Message: Same");
    }

    #[test]
    fn test_source_defaults_to_none() {
        let err = OperationResultError::from_issue(ValidationIssue::error("e").unwrap());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_with_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = OperationResultError::from_issue(ValidationIssue::error("e").unwrap())
            .with_source(inner);

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "disk full");
        assert_eq!(err.to_string(), "Error Message: e");
    }

    #[test]
    fn test_from_issue_conversion() {
        fn fail() -> Result<(), OperationResultError> {
            Err(ValidationIssue::error("converted").unwrap())?
        }

        assert_eq!(fail().unwrap_err().to_string(), "Error Message: converted");
    }

    #[test]
    fn test_debug_format() {
        let err = OperationResultError::from_issue(ValidationIssue::error("dbg").unwrap());
        let debug = format!("{:?}", err);
        assert!(debug.contains("OperationResultError"));
        assert!(debug.contains("dbg"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_escalation_is_logged() {
            let _ = OperationResultError::from_issue(ValidationIssue::error("logged").unwrap());
            assert!(logs_contain("escalating validation issues into an error"));
        }
    }
}
