//! Boolean predicates

use serde_json::Value;

use crate::foundation::{ValidationError, kind_of};

crate::validator! {
    /// Accepts `true` and `false` only; no truthy or falsy coercion.
    pub IsBoolean for Value;
    rule(input) { input.is_boolean() }
    error(input) { ValidationError::type_mismatch("boolean", kind_of(input)) }
    fn boolean();
}
