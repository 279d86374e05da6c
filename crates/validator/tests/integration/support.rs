//! Shared helpers for the chain integration tests.

use serde_json::Value;
use vigil_validator::prelude::*;

pub static SPEC: ErrorSpec = ErrorSpec::new("FIELD_IS_REQUIRED", "FIELD_IS_INVALID");

/// Every check the chain offers, as a value a test table can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    String,
    StringLen,
    StringWith,
    StringEnum,
    Number,
    Float,
    Boolean,
    DateIso,
    Email,
    Uuid,
    Object,
    ObjectNotEmpty,
    ObjectId,
    Array,
    ArrayNotEmpty,
    ArrayMatch,
    Custom,
}

impl Check {
    pub const ALL: [Self; 17] = [
        Self::String,
        Self::StringLen,
        Self::StringWith,
        Self::StringEnum,
        Self::Number,
        Self::Float,
        Self::Boolean,
        Self::DateIso,
        Self::Email,
        Self::Uuid,
        Self::Object,
        Self::ObjectNotEmpty,
        Self::ObjectId,
        Self::Array,
        Self::ArrayNotEmpty,
        Self::ArrayMatch,
        Self::Custom,
    ];

    pub fn apply(self, chain: Chain<'_>) -> Chain<'_> {
        match self {
            Self::String => chain.is_string(),
            Self::StringLen => chain.is_string_len(1, 8),
            Self::StringWith => chain.is_string_with(&IsString::new().max(8).excluding(["root"])),
            Self::StringEnum => chain.is_string_enum(&["name", "type"]),
            Self::Number => chain.is_number(),
            Self::Float => chain.is_float(),
            Self::Boolean => chain.is_boolean(),
            Self::DateIso => chain.is_date_iso(),
            Self::Email => chain.is_email(),
            Self::Uuid => chain.is_uuid(),
            Self::Object => chain.is_object(),
            Self::ObjectNotEmpty => chain.is_object_not_empty(),
            Self::ObjectId => chain.is_object_id(),
            Self::Array => chain.is_array(),
            Self::ArrayNotEmpty => chain.is_array_not_empty(),
            Self::ArrayMatch => chain.is_array_match(&["test"]),
            Self::Custom => chain.custom(|v| v.as_str().is_some_and(|s| s.starts_with('v'))),
        }
    }
}

/// Runs one check over `value` and returns the codes it appended.
pub fn run(check: Check, value: Option<&Value>, optional: bool) -> Vec<String> {
    let mut sink = ErrorSink::new();
    let chain = validate(value, &SPEC, &mut sink);
    let chain = if optional { chain.is_optional() } else { chain };
    check.apply(chain);
    sink.into_codes()
}

/// Codes appended by `check` for a present `value`: empty or the invalid code.
pub fn outcome(check: Check, value: &Value) -> Result<(), String> {
    match run(check, Some(value), false).as_slice() {
        [] => Ok(()),
        [code] => Err(code.clone()),
        more => panic!("{check:?} appended {} codes: {more:?}", more.len()),
    }
}
