//! Serde support for validation issues
//!
//! `ValidationIssue` serializes as a plain struct. Deserialization goes through
//! the regular constructor so a blank message is rejected exactly as it would
//! be in code.
//!
//! ```rust
//! use validation_outcome::ValidationIssue;
//!
//! let json = r#"{"message":"Foo is empty","level":"Error","member_names":["Foo"]}"#;
//! let issue: ValidationIssue = serde_json::from_str(json).unwrap();
//! assert_eq!(issue.message(), "Foo is empty");
//!
//! let blank = r#"{"message":"  ","level":"Warning"}"#;
//! assert!(serde_json::from_str::<ValidationIssue>(blank).is_err());
//! ```

use serde::{Deserialize, Deserializer};

use crate::issue::{MemberNames, ValidationIssue};
use crate::level::IssueLevel;

#[derive(Deserialize)]
struct RawIssue {
    message: String,
    level: IssueLevel,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    member_names: Option<MemberNames>,
}

impl<'de> Deserialize<'de> for ValidationIssue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawIssue::deserialize(deserializer)?;
        let mut issue =
            ValidationIssue::new(raw.message, raw.level).map_err(serde::de::Error::custom)?;
        issue.code = raw.code;
        issue.member_names = raw.member_names;
        Ok(issue)
    }
}
