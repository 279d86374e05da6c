use rstest::rstest;
use serde_json::{Value, json};

use crate::support::{Check, outcome};

// ============================================================================
// TEXT
// ============================================================================

#[rstest]
#[case::empty(json!(""), true)]
#[case::word(json!("foo_bar"), true)]
#[case::number(json!(1), false)]
#[case::array(json!(["a"]), false)]
fn is_string(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::String, &value).is_ok(), ok);
}

#[rstest]
#[case::empty(json!(""), false)]
#[case::min(json!("a"), true)]
#[case::max(json!("abcdefgh"), true)]
#[case::too_long(json!("abcdefghi"), false)]
#[case::multibyte_counts_chars(json!("ääääääää"), true)]
fn is_string_len(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::StringLen, &value).is_ok(), ok);
}

#[rstest]
#[case::allowed(json!("admin"), true)]
#[case::excluded(json!("root"), false)]
#[case::too_long(json!("administrator"), false)]
#[case::empty(json!(""), true)]
fn is_string_with(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::StringWith, &value).is_ok(), ok);
}

#[rstest]
#[case::member(json!("name"), true)]
#[case::other(json!("title"), false)]
#[case::empty_not_enumerated(json!(""), false)]
#[case::not_text(json!(["name"]), false)]
fn is_string_enum(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::StringEnum, &value).is_ok(), ok);
}

// ============================================================================
// NUMBERS AND BOOLEANS
// ============================================================================

#[rstest]
#[case::integer(json!(42), true)]
#[case::negative(json!(-7), true)]
#[case::zero_fraction(json!(2.0), true)]
#[case::fraction(json!(1.1), false)]
#[case::digit_text(json!("12"), false)]
#[case::boolean(json!(true), false)]
fn is_number(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Number, &value).is_ok(), ok);
}

#[rstest]
#[case::fraction(json!(1.1), true)]
#[case::integer(json!(3), true)]
#[case::digit_text(json!("1.1"), false)]
fn is_float(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Float, &value).is_ok(), ok);
}

#[rstest]
#[case::yes(json!(true), true)]
#[case::no(json!(false), true)]
#[case::text(json!("true"), false)]
#[case::one(json!(1), false)]
fn is_boolean(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Boolean, &value).is_ok(), ok);
}

// ============================================================================
// FORMATS
// ============================================================================

#[rstest]
#[case::rfc3339(json!("2024-02-29T10:15:30Z"), true)]
#[case::offset(json!("2024-02-29T10:15:30+02:00"), true)]
#[case::fractional_seconds(json!("2024-02-29T10:15:30.125"), true)]
#[case::minutes(json!("2024-02-29T10:15"), true)]
#[case::date(json!("2024-02-29"), true)]
#[case::year_month(json!("2024-02"), true)]
#[case::minutes_utc(json!("2024-02-29T10:15Z"), true)]
#[case::minutes_offset(json!("2024-02-29T10:15+02:00"), true)]
#[case::basic_offset(json!("2024-02-29T10:15:30+0200"), true)]
#[case::comma_fraction(json!("2024-02-29T10:15:30,5Z"), true)]
#[case::basic_format(json!("20240229T101530Z"), true)]
#[case::hour_out_of_range(json!("2024-02-29T24:15"), false)]
#[case::no_leap_day(json!("2023-02-29"), false)]
#[case::words(json!("yesterday"), false)]
#[case::timestamp(json!(1_700_000_000), false)]
fn is_date_iso(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::DateIso, &value).is_ok(), ok);
}

#[rstest]
#[case::plain(json!("user@example.com"), true)]
#[case::plus(json!("first.last+tag@mail.example.org"), true)]
#[case::no_dot(json!("user@localhost"), false)]
#[case::no_at(json!("user.example.com"), false)]
#[case::leading_dot(json!(".user@example.com"), false)]
#[case::double_dot(json!("first..last@example.com"), false)]
#[case::not_text(json!(5), false)]
fn is_email(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Email, &value).is_ok(), ok);
}

#[rstest]
#[case::v4(json!("5a90c78c-3adb-41f8-b166-2fb38c9baa24"), true)]
#[case::v1(json!("6ba7b810-9dad-11d1-80b4-00c04fd430c8"), true)]
#[case::v3(json!("6fa459ea-ee8a-3ca4-894e-db77e160355e"), false)]
#[case::v5(json!("886313e1-3b8a-5372-9b90-0c9aee199e5d"), false)]
#[case::simple_form(json!("5a90c78c3adb41f8b1662fb38c9baa24"), false)]
#[case::garbage(json!("not-a-uuid"), false)]
fn is_uuid(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Uuid, &value).is_ok(), ok);
}

// ============================================================================
// OBJECTS
// ============================================================================

#[rstest]
#[case::empty(json!({}), true)]
#[case::filled(json!({"a": 1}), true)]
#[case::array(json!([]), false)]
#[case::text(json!("{}"), false)]
fn is_object(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Object, &value).is_ok(), ok);
}

#[rstest]
#[case::filled(json!({"foo": "bar"}), true)]
#[case::empty(json!({}), false)]
#[case::array(json!([]), false)]
fn is_object_not_empty(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::ObjectNotEmpty, &value).is_ok(), ok);
}

#[rstest]
#[case::hex(json!("507f1f77bcf86cd799439011"), true)]
#[case::upper_hex(json!("507F1F77BCF86CD799439011"), true)]
#[case::extended(json!({"$oid": "507f1f77bcf86cd799439011"}), true)]
#[case::any_number(json!(12), true)]
#[case::negative_number(json!(-3.5), true)]
#[case::short(json!("507f1f77bcf86cd79943901"), false)]
#[case::non_hex(json!("507f1f77bcf86cd79943901z"), false)]
#[case::extra_keys(json!({"$oid": "507f1f77bcf86cd799439011", "x": 1}), false)]
#[case::boolean(json!(true), false)]
fn is_object_id(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::ObjectId, &value).is_ok(), ok);
}

// ============================================================================
// ARRAYS
// ============================================================================

#[rstest]
#[case::empty(json!([]), true)]
#[case::filled(json!([1, "a"]), true)]
#[case::object(json!({}), false)]
fn is_array(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Array, &value).is_ok(), ok);
}

#[rstest]
#[case::filled(json!([0]), true)]
#[case::empty(json!([]), false)]
#[case::text(json!("a"), false)]
fn is_array_not_empty(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::ArrayNotEmpty, &value).is_ok(), ok);
}

#[rstest]
#[case::member(json!(["test"]), true)]
#[case::repeated(json!(["test", "test"]), true)]
#[case::empty(json!([]), true)]
#[case::stranger(json!(["test", "x"]), false)]
#[case::not_array(json!("test"), false)]
fn is_array_match(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::ArrayMatch, &value).is_ok(), ok);
}

// ============================================================================
// CUSTOM
// ============================================================================

#[rstest]
#[case::accepted(json!("vigil"), true)]
#[case::rejected(json!("other"), false)]
#[case::not_text(json!(1), false)]
fn custom(#[case] value: Value, #[case] ok: bool) {
    assert_eq!(outcome(Check::Custom, &value).is_ok(), ok);
}

#[test]
fn failure_reports_invalid_code() {
    assert_eq!(
        outcome(Check::ObjectNotEmpty, &json!({})),
        Err("FIELD_IS_INVALID".to_owned())
    );
}
