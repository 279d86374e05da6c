//! Key normalization for JSON documents.

use serde_json::{Map, Value};

/// Rewrites every object key from `snake_case` to `camelCase`.
///
/// Non-object input yields an empty object. Nested objects are rewritten
/// recursively, including objects inside arrays; other array elements are
/// kept as they are. Leading underscores survive, so `_id` stays `_id`.
///
/// ```
/// use serde_json::json;
/// use vigil_params::snake_to_camel;
///
/// let doc = json!({"test_http_validation_lib": 1, "_id": 2});
/// assert_eq!(snake_to_camel(&doc), json!({"testHttpValidationLib": 1, "_id": 2}));
/// assert_eq!(snake_to_camel(&json!("")), json!({}));
/// ```
#[must_use]
pub fn snake_to_camel(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(convert_map(map)),
        _ => Value::Object(Map::new()),
    }
}

fn convert_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (camel_key(key), convert_nested(value)))
        .collect()
}

fn convert_nested(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(convert_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(convert_nested).collect()),
        other => other.clone(),
    }
}

fn camel_key(key: &str) -> String {
    let body = key.trim_start_matches('_');
    let (leading, _) = key.split_at(key.len() - body.len());

    let mut camel = String::with_capacity(key.len());
    camel.push_str(leading);

    let mut fragments = body.split('_');
    if let Some(first) = fragments.next() {
        camel.push_str(first);
    }
    for fragment in fragments {
        let mut chars = fragment.chars();
        if let Some(initial) = chars.next() {
            camel.extend(initial.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
