//! Operation results that accumulate validation issues
//!
//! [`OperationResult<T>`] bundles a set of [`ValidationIssue`]s with an
//! optional payload of type `T`. It is the value-bearing shape; the value-less
//! shape is simply `OperationResult<()>`, which is also the default type
//! parameter.
//!
//! Results are immutable. Every `add_*` and `set_value` call returns a new
//! result and leaves the receiver as it was, so a result can be shared freely
//! and used as a starting point many times.
//!
//! # Success rule
//!
//! A result is successful iff none of its issues is at a blocking level
//! ([`IssueLevel::Error`](crate::IssueLevel::Error)). Warnings never make a
//! result unsuccessful. See [`ExecutionResult`](crate::ExecutionResult) for
//! the stricter "any issue fails" policy.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::OperationResult;
//!
//! let result = OperationResult::success()
//!     .add_warning("Name is unusually long")?;
//! assert!(result.is_successful());
//!
//! let result = result.add_error_for("Foo is empty", ["Foo", "Bar"])?;
//! assert!(!result.is_successful());
//! assert_eq!(result.len(), 2);
//! # Ok::<(), validation_outcome::ArgumentError>(())
//! ```

use std::sync::{Arc, LazyLock};

use indexmap::IndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;
use crate::failure::OperationResultError;
use crate::issue::ValidationIssue;

/// The set of issues held by an [`OperationResult`].
///
/// Duplicates (by value) collapse to one entry. Iteration follows the order in
/// which distinct issues were first added.
pub type IssueSet = IndexSet<ValidationIssue>;

static SUCCESS: LazyLock<OperationResult> = LazyLock::new(OperationResult::new);

/// An immutable accumulation of validation issues plus an optional payload.
///
/// The issue storage is never modified once built. Operations that add issues
/// copy it into a fresh set; operations that add nothing share it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationResult<T = ()> {
    #[cfg_attr(feature = "serde", serde(default))]
    issues: Arc<IssueSet>,
    value: Option<T>,
}

impl OperationResult {
    /// The shared, issue-free result.
    ///
    /// Built once on first use and never modified, so it is safe to read from
    /// any thread.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::OperationResult;
    ///
    /// let success = OperationResult::success();
    /// assert!(success.is_successful());
    /// assert!(success.is_empty());
    /// assert!(std::ptr::eq(success, OperationResult::success()));
    /// ```
    pub fn success() -> &'static OperationResult {
        &SUCCESS
    }
}

impl<T> OperationResult<T> {
    /// Create a result with no issues and no value.
    pub fn new() -> Self {
        OperationResult {
            issues: Arc::new(IssueSet::new()),
            value: None,
        }
    }

    /// Create a result with no issues carrying `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::OperationResult;
    ///
    /// let result = OperationResult::with_value(42);
    /// assert_eq!(result.value(), Some(&42));
    /// assert!(result.is_successful());
    /// ```
    pub fn with_value(value: T) -> Self {
        OperationResult {
            issues: Arc::new(IssueSet::new()),
            value: Some(value),
        }
    }

    /// Create a result holding `issues` and no value.
    pub fn from_issues<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        OperationResult {
            issues: Arc::new(issues.into_iter().collect()),
            value: None,
        }
    }

    /// Create a result holding both `issues` and `value`.
    pub fn from_parts<I>(issues: I, value: T) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        OperationResult {
            issues: Arc::new(issues.into_iter().collect()),
            value: Some(value),
        }
    }

    /// Returns `true` iff no issue is at a blocking level.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{OperationResult, ValidationIssue};
    ///
    /// let warned = OperationResult::<()>::from_issues([ValidationIssue::warning("w").unwrap()]);
    /// assert!(warned.is_successful());
    ///
    /// let failed = warned.add_issue(ValidationIssue::error("e").unwrap());
    /// assert!(!failed.is_successful());
    /// ```
    pub fn is_successful(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_blocking)
    }

    /// Iterate over the issues in insertion order.
    pub fn issues(&self) -> indexmap::set::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// The underlying issue set.
    pub fn issue_set(&self) -> &IssueSet {
        &self.issues
    }

    /// Iterate over the blocking issues only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> + '_ {
        self.issues.iter().filter(|issue| issue.is_blocking())
    }

    /// Iterate over the non-blocking issues only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> + '_ {
        self.issues.iter().filter(|issue| !issue.is_blocking())
    }

    /// Number of distinct issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns `true` if there are no issues at all.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `true` if an equal issue is already present.
    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }

    /// The payload, if one was supplied.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the result and return its payload.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns a result with the same issues and `value` as its payload.
    ///
    /// The payload is never inspected.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::OperationResult;
    ///
    /// let first = OperationResult::with_value("draft");
    /// let second = first.set_value("final");
    ///
    /// assert_eq!(first.value(), Some(&"draft"));
    /// assert_eq!(second.value(), Some(&"final"));
    /// assert!(first.shares_issues_with(&second));
    /// ```
    pub fn set_value(&self, value: T) -> Self {
        OperationResult {
            issues: Arc::clone(&self.issues),
            value: Some(value),
        }
    }

    /// Returns a value-less result with the same issues.
    pub fn without_value(&self) -> OperationResult {
        OperationResult {
            issues: Arc::clone(&self.issues),
            value: None,
        }
    }

    /// Returns `true` if both results are backed by the very same issue storage.
    ///
    /// This is identity, not equality: two results holding equal issues built
    /// separately do not share storage.
    pub fn shares_issues_with<U>(&self, other: &OperationResult<U>) -> bool {
        Arc::ptr_eq(&self.issues, &other.issues)
    }

    /// Escalate an unsuccessful result into an [`OperationResultError`].
    ///
    /// Successful results (including ones holding only warnings) are returned
    /// unchanged in `Ok`.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{OperationResult, OperationResultError};
    ///
    /// fn save(name: &str) -> Result<OperationResult<String>, OperationResultError> {
    ///     let mut result = OperationResult::with_value(name.to_string());
    ///     if name.is_empty() {
    ///         result = result.add_error_for("Name is required", ["Name"]).unwrap();
    ///     }
    ///     result.into_result()
    /// }
    ///
    /// assert!(save("Ada").is_ok());
    ///
    /// let err = save("").unwrap_err();
    /// assert_eq!(err.to_string(), "Member(s): Name\nError Message: Name is required");
    /// ```
    pub fn into_result(self) -> Result<Self, OperationResultError> {
        if self.is_successful() {
            Ok(self)
        } else {
            Err(OperationResultError::escalate(self.without_value()))
        }
    }
}

impl<T: Clone> OperationResult<T> {
    /// Returns a result whose issues are this result's issues plus `issue`.
    ///
    /// Adding an issue that is already present (by value) leaves the set size
    /// unchanged.
    pub fn add_issue(&self, issue: ValidationIssue) -> Self {
        self.add_issues(std::iter::once(issue))
    }

    /// Returns a result whose issues are the union of this result's issues and
    /// `issues`.
    ///
    /// When `issues` is empty, the returned result shares this result's
    /// storage and no new set is allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{OperationResult, ValidationIssue};
    ///
    /// let start = OperationResult::success();
    ///
    /// let same = start.add_issues(Vec::new());
    /// assert!(same.shares_issues_with(start));
    ///
    /// let grown = start.add_issues([
    ///     ValidationIssue::error("a").unwrap(),
    ///     ValidationIssue::error("a").unwrap(),
    /// ]);
    /// assert_eq!(grown.len(), 1);
    /// assert!(start.is_empty());
    /// ```
    pub fn add_issues<I>(&self, issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        let mut incoming = issues.into_iter().peekable();
        if incoming.peek().is_none() {
            return self.clone();
        }

        let mut merged = IssueSet::clone(&self.issues);
        merged.extend(incoming);

        OperationResult {
            issues: Arc::new(merged),
            value: self.value.clone(),
        }
    }

    /// Add an [`IssueLevel::Error`](crate::IssueLevel::Error) issue.
    pub fn add_error(&self, message: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(self.add_issue(ValidationIssue::error(message)?))
    }

    /// Add an [`IssueLevel::Error`](crate::IssueLevel::Error) issue tied to
    /// the given member names.
    pub fn add_error_for<I, S>(
        &self,
        message: impl Into<String>,
        member_names: I,
    ) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let issue = ValidationIssue::error(message)?.with_member_names(member_names);
        Ok(self.add_issue(issue))
    }

    /// Add an [`IssueLevel::Warning`](crate::IssueLevel::Warning) issue.
    pub fn add_warning(&self, message: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(self.add_issue(ValidationIssue::warning(message)?))
    }

    /// Add an [`IssueLevel::Warning`](crate::IssueLevel::Warning) issue tied to
    /// the given member names.
    pub fn add_warning_for<I, S>(
        &self,
        message: impl Into<String>,
        member_names: I,
    ) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let issue = ValidationIssue::warning(message)?.with_member_names(member_names);
        Ok(self.add_issue(issue))
    }
}

impl<T> Default for OperationResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<ValidationIssue> for OperationResult<T> {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self::from_issues(iter)
    }
}

impl<'a, T> IntoIterator for &'a OperationResult<T> {
    type Item = &'a ValidationIssue;
    type IntoIter = indexmap::set::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues()
    }
}
