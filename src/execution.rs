//! Execution results with the strict "any record fails" policy
//!
//! [`ExecutionResult<T>`] is the simpler sibling of
//! [`OperationResult<T>`](crate::OperationResult). It keeps an ordered list of
//! raw [`ValidationRecord`]s, duplicates included, and has no notion of
//! severity: any record at all makes it unsuccessful.
//!
//! The two policies disagree on warning-only outcomes, so they live in separate
//! types and never convert into each other implicitly.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::{ExecutionResult, ValidationRecord};
//!
//! let result = ExecutionResult::success()
//!     .add_validation_record(ValidationRecord::new("Quota exceeded"));
//!
//! assert!(!result.is_successful());
//! assert!(ExecutionResult::success().is_successful());
//! ```

use std::sync::{Arc, LazyLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::record::ValidationRecord;

static SUCCESS: LazyLock<ExecutionResult> = LazyLock::new(ExecutionResult::new);

/// An immutable list of validation records plus an optional result payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionResult<T = ()> {
    #[cfg_attr(feature = "serde", serde(default))]
    records: Arc<Vec<ValidationRecord>>,
    result: Option<T>,
}

impl ExecutionResult {
    /// The shared, record-free execution result.
    pub fn success() -> &'static ExecutionResult {
        &SUCCESS
    }
}

impl<T> ExecutionResult<T> {
    /// Create an execution result with no records and no payload.
    pub fn new() -> Self {
        ExecutionResult {
            records: Arc::new(Vec::new()),
            result: None,
        }
    }

    /// Create an execution result with no records carrying `result`.
    pub fn with_result(result: T) -> Self {
        ExecutionResult {
            records: Arc::new(Vec::new()),
            result: Some(result),
        }
    }

    /// Create an execution result holding `records` in order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ValidationRecord>,
    {
        ExecutionResult {
            records: Arc::new(records.into_iter().collect()),
            result: None,
        }
    }

    /// Returns `true` iff there are no records at all.
    pub fn is_successful(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in the order they were added.
    pub fn records(&self) -> &[ValidationRecord] {
        &self.records
    }

    /// The payload, if one was supplied.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consume the execution result and return its payload.
    pub fn into_inner(self) -> Option<T> {
        self.result
    }

    /// Returns an execution result with the same records and a new payload.
    pub fn set_result(&self, result: T) -> Self {
        ExecutionResult {
            records: Arc::clone(&self.records),
            result: Some(result),
        }
    }

    /// Returns `true` if both values are backed by the very same record storage.
    pub fn shares_records_with<U>(&self, other: &ExecutionResult<U>) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<T: Clone> ExecutionResult<T> {
    /// Returns an execution result with `record` appended.
    pub fn add_validation_record(&self, record: ValidationRecord) -> Self {
        self.add_validation_records(std::iter::once(record))
    }

    /// Returns an execution result with `records` appended in order.
    ///
    /// When `records` is empty the returned value shares this value's storage.
    pub fn add_validation_records<I>(&self, records: I) -> Self
    where
        I: IntoIterator<Item = ValidationRecord>,
    {
        let mut incoming = records.into_iter().peekable();
        if incoming.peek().is_none() {
            return self.clone();
        }

        let mut appended = Vec::clone(&self.records);
        appended.extend(incoming);

        ExecutionResult {
            records: Arc::new(appended),
            result: self.result.clone(),
        }
    }
}

impl<T> Default for ExecutionResult<T> {
    fn default() -> Self {
        Self::new()
    }
}
