//! # Validation Outcome
//!
//! Immutable operation results that accumulate validation issues instead of
//! failing fast.
//!
//! ## Philosophy
//!
//! Ordinary validation problems are data, not control flow:
//! - **Collect** every problem an operation finds as a [`ValidationIssue`]
//! - **Decide** afterwards whether the collected problems block the operation
//! - **Escalate** only when the caller chooses to, with [`OperationResultError`]
//!
//! This crate is not a validation engine. It does not inspect objects or run
//! rules; it holds the outcomes that rules elsewhere produce.
//!
//! ## Quick Example
//!
//! ```rust
//! use validation_outcome::{OperationResult, OperationResultError};
//!
//! fn register(name: &str, nickname: &str) -> OperationResult<String> {
//!     let mut result = OperationResult::with_value(name.to_string());
//!
//!     if name.trim().is_empty() {
//!         result = result.add_error_for("Name is required", ["Name"]).unwrap();
//!     }
//!     if nickname.len() > 8 {
//!         result = result.add_warning_for("Nickname will be truncated", ["Nickname"]).unwrap();
//!     }
//!     result
//! }
//!
//! // Warnings alone do not block.
//! let ok = register("Ada", "countess-of-lovelace");
//! assert!(ok.is_successful());
//! assert_eq!(ok.value().map(String::as_str), Some("Ada"));
//!
//! // Errors do, and can be escalated when the caller wants `?` semantics.
//! let failed = register("", "x");
//! let err = OperationResultError::from_result(&failed).unwrap();
//! assert_eq!(err.to_string(), "Member(s): Name\nError Message: Name is required");
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type
//! - `tracing`: debug/trace events when issues are escalated or adapted
//! - `proptest`: `Arbitrary` implementations and strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod execution;
pub mod failure;
pub mod issue;
pub mod level;
pub mod record;
pub mod result;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::ArgumentError;
pub use execution::ExecutionResult;
pub use failure::OperationResultError;
pub use issue::{MemberNames, ValidationIssue};
pub use level::IssueLevel;
pub use record::ValidationRecord;
pub use result::{IssueSet, OperationResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ArgumentError;
    pub use crate::execution::ExecutionResult;
    pub use crate::failure::OperationResultError;
    pub use crate::issue::ValidationIssue;
    pub use crate::level::IssueLevel;
    pub use crate::record::ValidationRecord;
    pub use crate::result::OperationResult;
}
