//! End-to-end scenarios: collect issues, inspect, escalate.

use validation_outcome::prelude::*;
use validation_outcome::{assert_issue_messages, assert_successful, assert_unsuccessful};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    sku: String,
    quantity: u32,
}

fn validate_order(order: Order) -> OperationResult<Order> {
    let mut result = OperationResult::with_value(order.clone());

    if order.sku.trim().is_empty() {
        result = result
            .add_error_for("Sku is required", ["Sku"])
            .expect("message is not blank");
    }
    if order.quantity == 0 {
        result = result
            .add_error_for("Quantity must be positive", ["Quantity"])
            .expect("message is not blank");
    }
    if order.quantity > 100 {
        result = result
            .add_warning_for("Large orders ship separately", ["Quantity"])
            .expect("message is not blank");
    }

    result
}

#[test]
fn scenario_error_with_member_names_on_success() {
    let result = OperationResult::success()
        .add_error_for("Foo is empty", ["Foo", "Bar"])
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_unsuccessful!(result);

    let issue = result.issues().next().unwrap();
    assert_eq!(issue.message(), "Foo is empty");
    let names: Vec<&str> = issue
        .member_names()
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["Foo", "Bar"]);

    assert!(OperationResult::success().is_empty());
}

#[test]
fn scenario_single_error_message() {
    let err = OperationResultError::from_issues([
        ValidationIssue::error("Foo is beyond all reason.").unwrap()
    ])
    .unwrap();

    assert_eq!(err.to_string(), "Error Message: Foo is beyond all reason.");
}

#[test]
fn scenario_single_error_with_members_message() {
    let err = OperationResultError::from_issues([ValidationIssue::error("X")
        .unwrap()
        .with_member_names(["Foo", "Bar"])])
    .unwrap();

    assert_eq!(err.to_string(), "Member(s): Foo, Bar\nError Message: X");
}

#[test]
fn scenario_mixed_levels_message() {
    let error = ValidationIssue::error("Foo is beyond all reason.")
        .unwrap()
        .with_member_names(["Foo", "Bar"]);
    let warning = ValidationIssue::warning("What is Kung Fu Fighting?").unwrap();

    let err = OperationResultError::from_issues([error.clone(), warning.clone()]).unwrap();
    let message = err.to_string();

    let blocks: Vec<&str> = message.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks.contains(&"Member(s): Foo, Bar\nError Message: Foo is beyond all reason."));
    assert!(blocks.contains(&"Warning Message: What is Kung Fu Fighting?"));

    assert!(err.result().contains(&error));
    assert!(err.result().contains(&warning));
}

#[test]
fn scenario_payload_survives_issue_additions() {
    let order = Order {
        sku: "ABC-1".to_string(),
        quantity: 3,
    };

    let result = OperationResult::with_value(order.clone())
        .add_warning("first")
        .unwrap()
        .add_error("second")
        .unwrap()
        .add_issue(ValidationIssue::warning("third").unwrap())
        .add_issues([ValidationIssue::error("fourth").unwrap()])
        .add_validation_record(&ValidationRecord::new("fifth"))
        .unwrap();

    assert_eq!(result.value(), Some(&order));
    assert_eq!(result.len(), 5);

    let replaced = result.set_value(Order {
        sku: "XYZ-9".to_string(),
        quantity: 1,
    });
    assert_eq!(replaced.value().unwrap().sku, "XYZ-9");
    assert_eq!(result.value(), Some(&order));
    assert_eq!(replaced.issue_set(), result.issue_set());
}

#[test]
fn valid_order_is_successful() {
    let result = validate_order(Order {
        sku: "ABC-1".to_string(),
        quantity: 2,
    });

    assert_successful!(result);
    assert!(result.is_empty());
    assert!(result.into_result().is_ok());
}

#[test]
fn large_order_only_warns() {
    let result = validate_order(Order {
        sku: "ABC-1".to_string(),
        quantity: 500,
    });

    assert_successful!(result);
    assert_issue_messages!(result, ["Large orders ship separately"]);
}

#[test]
fn invalid_order_escalates_with_every_error() {
    let result = validate_order(Order {
        sku: " ".to_string(),
        quantity: 0,
    });

    assert_unsuccessful!(result);

    let err = result.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Member(s): Sku\nError Message: Sku is required\n\n\
         Member(s): Quantity\nError Message: Quantity must be positive"
    );
    assert_eq!(err.result().errors().count(), 2);
}

#[test]
fn escalated_error_travels_through_question_mark() {
    fn place(order: Order) -> Result<Order, OperationResultError> {
        let checked = validate_order(order).into_result()?;
        Ok(checked.into_value().expect("validated orders carry a value"))
    }

    assert!(place(Order {
        sku: "ok".to_string(),
        quantity: 1
    })
    .is_ok());

    let err = place(Order {
        sku: String::new(),
        quantity: 1,
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "Member(s): Sku\nError Message: Sku is required");
}

#[test]
fn escalated_error_keeps_inner_cause() {
    use std::error::Error;

    let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header");
    let failed = OperationResult::success().add_error("Import failed").unwrap();

    let err = OperationResultError::from_result(&failed)
        .unwrap()
        .with_source(cause);

    assert_eq!(err.source().unwrap().to_string(), "bad header");
    assert_eq!(err.result(), &failed);
}

#[test]
fn execution_result_fails_on_any_record() {
    let warned = ExecutionResult::success().add_validation_record(ValidationRecord::new("warn?"));
    assert!(!warned.is_successful());

    let severity_aware = OperationResult::success().add_warning("warn?").unwrap();
    assert!(severity_aware.is_successful());
}

#[test]
fn records_from_external_rules_always_block() {
    let records = vec![
        ValidationRecord::new("Name is required").with_member_names(["Name"]),
        ValidationRecord::new("Email is invalid"),
    ];

    let result = records
        .iter()
        .try_fold(OperationResult::success().clone(), |acc, record| {
            acc.add_validation_record(record)
        })
        .unwrap();

    assert_eq!(result.errors().count(), 2);
    assert_eq!(result.warnings().count(), 0);
}

#[test]
fn blank_messages_rejected_everywhere() {
    let start = OperationResult::success();
    let issue = ValidationIssue::error("fine").unwrap();

    let failures = [
        ValidationIssue::error("").err(),
        ValidationIssue::warning(" ").err(),
        ValidationIssue::new("\t", IssueLevel::Error).err(),
        issue.with_message("\n").err(),
        start.add_error("").err(),
        start.add_warning("   ").err(),
        start.add_error_for(" ", ["A"]).err(),
        start.add_warning_for("", ["A"]).err(),
        start
            .add_validation_record(&ValidationRecord::new("  "))
            .err(),
    ];

    for failure in failures {
        assert_eq!(failure, Some(ArgumentError::Blank { name: "message" }));
    }
}
