//! Interop with external validation records
//!
//! Validation frameworks typically report a failure as a bare "message plus
//! member names" record. [`ValidationRecord`] models that record, and
//! [`OperationResult::add_validation_record`] adapts it into an
//! [`IssueLevel::Error`](crate::IssueLevel::Error) issue. Adapted records are
//! always blocking; a record cannot express a warning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;
use crate::issue::ValidationIssue;
use crate::result::OperationResult;

/// A validation outcome reported by an external rule system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationRecord {
    /// The reported message. Records without one cannot be adapted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub error_message: Option<String>,
    /// The members the record relates to, if the rule system reported any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub member_names: Option<Vec<String>>,
}

impl ValidationRecord {
    /// Create a record with a message and no member names.
    pub fn new(error_message: impl Into<String>) -> Self {
        ValidationRecord {
            error_message: Some(error_message.into()),
            member_names: None,
        }
    }

    /// Returns a copy listing the given member names.
    pub fn with_member_names<I, S>(mut self, member_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_names = Some(member_names.into_iter().map(Into::into).collect());
        self
    }

    /// Convert the record into an error-level issue.
    ///
    /// Absent member names become an empty set. Fails with
    /// [`ArgumentError::Missing`] if there is no message and
    /// [`ArgumentError::Blank`] if the message is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{IssueLevel, ValidationRecord};
    ///
    /// let issue = ValidationRecord::new("Email is invalid")
    ///     .with_member_names(["Email"])
    ///     .to_issue()
    ///     .unwrap();
    ///
    /// assert_eq!(issue.level(), IssueLevel::Error);
    /// assert!(issue.member_names().unwrap().contains("Email"));
    /// ```
    pub fn to_issue(&self) -> Result<ValidationIssue, ArgumentError> {
        let message = self
            .error_message
            .as_deref()
            .ok_or(ArgumentError::Missing {
                name: "error_message",
            })?;

        let member_names = self.member_names.as_deref().unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            members = member_names.len(),
            "adapting validation record into an error issue"
        );

        Ok(ValidationIssue::error(message)?.with_member_names(member_names.iter().cloned()))
    }
}

impl<T: Clone> OperationResult<T> {
    /// Adapt an external record into an error issue and add it.
    ///
    /// # Example
    ///
    /// ```
    /// use validation_outcome::{OperationResult, ValidationRecord};
    ///
    /// let result = OperationResult::success()
    ///     .add_validation_record(&ValidationRecord::new("Age must be positive"))
    ///     .unwrap();
    ///
    /// assert!(!result.is_successful());
    /// assert_eq!(result.issues().next().unwrap().message(), "Age must be positive");
    /// ```
    pub fn add_validation_record(
        &self,
        record: &ValidationRecord,
    ) -> Result<Self, ArgumentError> {
        Ok(self.add_issue(record.to_issue()?))
    }
}
