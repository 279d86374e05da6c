use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use crate::support::{Check, run};

#[rstest]
fn absent_value_appends_only_required(
    #[values(None, Some(Value::Null))] value: Option<Value>,
) {
    for check in Check::ALL {
        assert_eq!(
            run(check, value.as_ref(), false),
            ["FIELD_IS_REQUIRED"],
            "{check:?}"
        );
    }
}

#[rstest]
fn absent_value_passes_when_optional(#[values(None, Some(Value::Null))] value: Option<Value>) {
    for check in Check::ALL {
        assert!(run(check, value.as_ref(), true).is_empty(), "{check:?}");
    }
}

#[test]
fn optional_does_not_excuse_malformed_values() {
    let value = Value::Bool(true);
    assert_eq!(run(Check::String, Some(&value), true), ["FIELD_IS_INVALID"]);
}

#[test]
fn empty_string_is_present_not_absent() {
    let value = Value::String(String::new());
    assert_eq!(run(Check::StringLen, Some(&value), false), ["FIELD_IS_INVALID"]);
    assert!(run(Check::String, Some(&value), false).is_empty());
}
