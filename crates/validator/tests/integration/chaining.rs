use std::cell::Cell;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use vigil_validator::prelude::*;

use crate::support::SPEC;

// ============================================================================
// PREFIX
// ============================================================================

#[test]
fn prefix_is_prepended_to_invalid() {
    let mut sink = ErrorSink::new();
    let value = json!(1);
    validate_with_prefix(Some(&value), &SPEC, &mut sink, "prefix_").is_string();
    assert_eq!(sink.codes(), ["prefix_FIELD_IS_INVALID"]);
}

#[test]
fn prefix_is_prepended_to_required() {
    let mut sink = ErrorSink::new();
    validate_with_prefix(None, &SPEC, &mut sink, "items_0_").is_number();
    assert_eq!(sink.codes(), ["items_0_FIELD_IS_REQUIRED"]);
}

#[test]
fn array_items_are_told_apart_by_prefix() {
    let items = json!(["name", 3, "type"]);
    let mut sink = ErrorSink::new();

    let prefixes: Vec<String> = (0..3).map(|i| format!("fields_{i}_")).collect();
    for (item, prefix) in items.as_array().into_iter().flatten().zip(&prefixes) {
        validate_with_prefix(Some(item), &SPEC, &mut sink, prefix).is_string();
    }

    assert_eq!(sink.codes(), ["fields_1_FIELD_IS_INVALID"]);
}

// ============================================================================
// IS_VALID
// ============================================================================

#[test]
fn is_valid_runs_after_passing_check() {
    let calls = Cell::new(0);
    let mut sink = ErrorSink::new();
    let value = json!("ok");

    validate(Some(&value), &SPEC, &mut sink)
        .is_string()
        .is_valid(|| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 1);
    assert!(sink.is_empty());
}

#[test]
fn is_valid_skipped_after_failing_check() {
    let calls = Cell::new(0);
    let mut sink = ErrorSink::new();
    let value = json!("ok");

    validate(Some(&value), &SPEC, &mut sink)
        .is_number()
        .is_valid(|| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
}

#[test]
fn is_valid_follows_latest_check_only() {
    let calls = Cell::new(0);
    let mut sink = ErrorSink::new();
    let value = json!("ok");

    validate(Some(&value), &SPEC, &mut sink)
        .is_number()
        .is_string()
        .is_valid(|| calls.set(calls.get() + 1))
        .is_boolean()
        .is_valid(|| calls.set(calls.get() + 10));

    assert_eq!(calls.get(), 1);
    assert_eq!(sink.len(), 2);
}

#[test]
fn is_valid_on_fresh_chain() {
    let calls = Cell::new(0);
    let mut sink = ErrorSink::new();
    validate(None, &SPEC, &mut sink).is_valid(|| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn is_valid_after_optional_skip() {
    let calls = Cell::new(0);
    let mut sink = ErrorSink::new();
    validate(None, &SPEC, &mut sink)
        .is_optional()
        .is_uuid()
        .is_valid(|| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// ONE SINK, MANY FIELDS
// ============================================================================

static REQUEST_ID: ErrorSpec = ErrorSpec::new("REQUEST_ID_IS_REQUIRED", "REQUEST_ID_INVALID");
static SCHEMA: ErrorSpec = ErrorSpec::new("SCHEMA_IS_REQUIRED", "SCHEMA_IS_INVALID");

fn header_pass(request_id: Option<&Value>, schema: Option<&Value>) -> Vec<String> {
    let mut sink = ErrorSink::new();
    validate(request_id, &REQUEST_ID, &mut sink).is_string_len(36, 36);
    validate(schema, &SCHEMA, &mut sink).is_string_len(1, usize::MAX);
    sink.into_codes()
}

#[test]
fn valid_headers_leave_sink_empty() {
    let request_id = json!("5a90c78c-3adb-41f8-b166-2fb38c9baa24");
    let schema = json!("foo_bar");
    assert!(header_pass(Some(&request_id), Some(&schema)).is_empty());
}

#[test]
fn missing_headers_report_in_call_order() {
    assert_eq!(
        header_pass(None, None),
        ["REQUEST_ID_IS_REQUIRED", "SCHEMA_IS_REQUIRED"]
    );
}

#[test]
fn string_bounds_tell_empty_apart_from_missing() {
    let empty = json!("");
    let mut sink = ErrorSink::new();
    validate(Some(&empty), &SPEC, &mut sink).is_string_len(0, 255);
    assert!(sink.is_empty());

    validate(Some(&empty), &SPEC, &mut sink).is_string_len(1, 255);
    assert_eq!(sink.codes(), ["FIELD_IS_INVALID"]);
}

#[test]
fn is_number_and_is_float_disagree_on_fractions() {
    let value = json!(1.1);
    let mut sink = ErrorSink::new();
    validate(Some(&value), &SPEC, &mut sink).is_float();
    assert!(sink.is_empty());
    validate(Some(&value), &SPEC, &mut sink).is_number();
    assert_eq!(sink.codes(), ["FIELD_IS_INVALID"]);
}

// ============================================================================
// CONFIGURATION FAULTS
// ============================================================================

static ROLE: ErrorSpec = ErrorSpec::new("ROLE_IS_REQUIRED", "ROLE_IS_INVALID");

fn role_pass(role: &Value, forbidden: &Value) -> Result<ErrorSink, ConfigurationError> {
    let mut sink = ErrorSink::new();
    let rule = IsString::new().min(1).excluding_value(forbidden)?;
    validate(Some(role), &ROLE, &mut sink).is_string_with(&rule);
    Ok(sink)
}

#[test]
fn forbidden_list_rejects_listed_value() {
    let sink = role_pass(&json!("root"), &json!(["root", "admin"])).unwrap();
    assert_eq!(sink.codes(), ["ROLE_IS_INVALID"]);

    let sink = role_pass(&json!("guest"), &json!(["root", "admin"])).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn forbidden_list_that_is_not_a_list_aborts_the_pass() {
    let err = role_pass(&json!("root"), &json!("root")).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::NotAList {
            argument: "not_allowed",
            found: "string",
        }
    );
}

#[test]
fn forbidden_list_with_non_text_entry_aborts_the_pass() {
    let err = role_pass(&json!("root"), &json!(["root", 7])).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::NotText {
            argument: "not_allowed",
            index: 1,
            found: "number",
        }
    );
}
