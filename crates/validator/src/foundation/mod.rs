//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//! - **Helpers**: [`kind_of`] names the JSON type of a value for diagnostics
//!
//! Predicates are plain types implementing [`Validate`] over
//! `serde_json::Value`. They know nothing about error sinks, optional
//! values or prefixes; the chain in [`crate::chain`] layers those policies on
//! top.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

use serde_json::Value;

/// Returns the JSON type name of a value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vigil_validator::foundation::kind_of;
///
/// assert_eq!(kind_of(&json!("x")), "string");
/// assert_eq!(kind_of(&json!([1])), "array");
/// ```
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
