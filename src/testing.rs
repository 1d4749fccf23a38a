//! Testing utilities for code that produces operation results
//!
//! This module provides assertion macros for [`OperationResult`](crate::OperationResult)
//! and, with the `proptest` feature, strategies for property-based testing.
//!
//! # Examples
//!
//! ```rust
//! use validation_outcome::{assert_issue_messages, assert_successful, assert_unsuccessful};
//! use validation_outcome::OperationResult;
//!
//! let ok = OperationResult::success().add_warning("minor").unwrap();
//! assert_successful!(ok);
//!
//! let failed = ok.add_error("major").unwrap();
//! assert_unsuccessful!(failed);
//! assert_issue_messages!(failed, ["minor", "major"]);
//! ```

/// Assert that an operation result is successful.
///
/// Panics, listing the blocking issues, if it is not.
///
/// # Example
///
/// ```rust
/// use validation_outcome::{assert_successful, OperationResult};
///
/// assert_successful!(OperationResult::success());
/// ```
#[macro_export]
macro_rules! assert_successful {
    ($result:expr) => {
        match &$result {
            result if result.is_successful() => {}
            result => {
                let blocking: ::std::vec::Vec<_> =
                    result.errors().map(|issue| issue.message()).collect();
                panic!("Expected successful result, got errors: {:?}", blocking);
            }
        }
    };
}

/// Assert that an operation result is not successful.
///
/// # Example
///
/// ```rust
/// use validation_outcome::{assert_unsuccessful, OperationResult};
///
/// let failed = OperationResult::success().add_error("broken").unwrap();
/// assert_unsuccessful!(failed);
/// ```
#[macro_export]
macro_rules! assert_unsuccessful {
    ($result:expr) => {
        match &$result {
            result if !result.is_successful() => {}
            result => {
                panic!("Expected unsuccessful result, got: {:?}", result);
            }
        }
    };
}

/// Assert the messages of an operation result's issues, in iteration order.
///
/// # Example
///
/// ```rust
/// use validation_outcome::{assert_issue_messages, OperationResult};
///
/// let result = OperationResult::success()
///     .add_error("first")
///     .unwrap()
///     .add_warning("second")
///     .unwrap();
/// assert_issue_messages!(result, ["first", "second"]);
/// ```
#[macro_export]
macro_rules! assert_issue_messages {
    ($result:expr, $expected:expr) => {{
        let messages: ::std::vec::Vec<&str> =
            $result.issues().map(|issue| issue.message()).collect();
        assert_eq!(messages, $expected);
    }};
}

#[cfg(feature = "proptest")]
pub use self::strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::{IssueLevel, OperationResult, ValidationIssue};

    impl Arbitrary for IssueLevel {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(IssueLevel::Warning), Just(IssueLevel::Error)].boxed()
        }
    }

    impl Arbitrary for ValidationIssue {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            issue_strategy().boxed()
        }
    }

    /// Strategy producing non-blank messages.
    pub fn message_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 .,]{0,24}"
    }

    /// Strategy producing issues with optional codes and member names.
    pub fn issue_strategy() -> impl Strategy<Value = ValidationIssue> {
        (
            message_strategy(),
            any::<IssueLevel>(),
            proptest::option::of("[A-Z][0-9]{1,3}"),
            proptest::option::of(proptest::collection::vec("[A-Z][a-z]{0,6}", 0..4)),
        )
            .prop_filter_map("message must be non-blank", |(message, level, code, names)| {
                let mut issue = ValidationIssue::new(message, level).ok()?;
                if let Some(code) = code {
                    issue = issue.with_code(code);
                }
                if let Some(names) = names {
                    issue = issue.with_member_names(names);
                }
                Some(issue)
            })
    }

    /// Strategy producing value-less results holding up to `max` issues.
    pub fn result_strategy(max: usize) -> impl Strategy<Value = OperationResult> {
        proptest::collection::vec(issue_strategy(), 0..=max).prop_map(OperationResult::from_issues)
    }
}
