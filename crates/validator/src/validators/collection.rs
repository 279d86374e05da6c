//! Array predicates

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, kind_of};

crate::validator! {
    /// Accepts JSON arrays.
    pub IsArray for Value;
    rule(input) { input.is_array() }
    error(input) { ValidationError::type_mismatch("array", kind_of(input)) }
    fn array();
}

crate::validator! {
    /// Accepts JSON arrays with at least one element.
    pub ArrayNotEmpty for Value;
    rule(input) { input.as_array().is_some_and(|items| !items.is_empty()) }
    error(input) {
        if input.is_array() {
            ValidationError::new("empty_array", "Array must have at least one element")
        } else {
            ValidationError::type_mismatch("array", kind_of(input))
        }
    }
    fn array_not_empty();
}

// ============================================================================
// ARRAY MATCH
// ============================================================================

/// Accepts arrays whose every element equals one of the allowed values.
///
/// An empty array passes. `T` is anything a JSON value compares against:
/// `&str`, `String`, `i64`, `bool` or `Value` itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vigil_validator::foundation::Validate;
/// use vigil_validator::validators::ArrayMatch;
///
/// let allowed = ["name", "type"];
/// let rule = ArrayMatch::new(&allowed);
/// assert!(rule.validate(&json!(["type", "name"])).is_ok());
/// assert!(rule.validate(&json!([])).is_ok());
/// assert!(rule.validate(&json!(["name", "x"])).is_err());
/// ```
#[derive(Debug)]
pub struct ArrayMatch<'a, T> {
    allowed: &'a [T],
}

impl<'a, T> ArrayMatch<'a, T> {
    /// Creates the predicate over a borrowed list of allowed values.
    #[must_use]
    pub const fn new(allowed: &'a [T]) -> Self {
        Self { allowed }
    }
}

impl<T> Validate for ArrayMatch<'_, T>
where
    Value: PartialEq<T>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Value::Array(items) = input else {
            return Err(ValidationError::type_mismatch("array", kind_of(input)));
        };

        match items
            .iter()
            .position(|item| !self.allowed.iter().any(|allowed| item == allowed))
        {
            None => Ok(()),
            Some(index) => Err(ValidationError::not_member(self.allowed.len())
                .with_param("index", index.to_string())),
        }
    }
}

/// Creates an [`ArrayMatch`] predicate.
#[must_use]
pub const fn array_match<T>(allowed: &[T]) -> ArrayMatch<'_, T> {
    ArrayMatch::new(allowed)
}
