//! Object and identifier predicates

use serde_json::Value;

use crate::foundation::{ValidationError, kind_of};

/// Key used by extended JSON to wrap a database object identifier.
pub const OBJECT_ID_KEY: &str = "$oid";

/// Returns `true` for 24 hexadecimal digits.
fn is_hex_id(text: &str) -> bool {
    text.len() == 24 && text.bytes().all(|b| b.is_ascii_hexdigit())
}

crate::validator! {
    /// Accepts JSON objects. Arrays are not objects.
    pub IsObject for Value;
    rule(input) { input.is_object() }
    error(input) { ValidationError::type_mismatch("object", kind_of(input)) }
    fn object();
}

crate::validator! {
    /// Accepts JSON objects with at least one key.
    pub ObjectNotEmpty for Value;
    rule(input) { input.as_object().is_some_and(|map| !map.is_empty()) }
    error(input) {
        if input.is_object() {
            ValidationError::new("empty_object", "Object must have at least one key")
        } else {
            ValidationError::type_mismatch("object", kind_of(input))
        }
    }
    fn object_not_empty();
}

crate::validator! {
    /// Accepts a database object identifier.
    ///
    /// Three shapes pass:
    /// - 24 hexadecimal digits as text, e.g. `"60661c2d8d01cf15042a47c8"`
    /// - the extended JSON form `{"$oid": "60661c2d8d01cf15042a47c8"}`
    /// - any JSON number
    pub ObjectId for Value;
    rule(input) {
        match input {
            Value::Number(_) => true,
            Value::String(text) => is_hex_id(text),
            Value::Object(map) => {
                map.len() == 1
                    && map
                        .get(OBJECT_ID_KEY)
                        .and_then(Value::as_str)
                        .is_some_and(is_hex_id)
            }
            _ => false,
        }
    }
    error(input) { ValidationError::invalid_format("object_id").with_param("actual", kind_of(input)) }
    fn object_id();
}
