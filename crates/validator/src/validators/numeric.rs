//! Numeric predicates
//!
//! Text that happens to contain digits is never numeric here: only JSON
//! numbers are. Use a query parser upstream when digits arrive as text.

use serde_json::{Number, Value};

use crate::foundation::{ValidationError, kind_of};

/// Returns `true` for numbers without a fractional part.
fn is_whole(number: &Number) -> bool {
    number.is_i64()
        || number.is_u64()
        || number
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

crate::validator! {
    /// Accepts JSON numbers that have no fractional part.
    ///
    /// `1` and `1.0` pass, `1.1` does not.
    pub IsNumber for Value;
    rule(input) { input.as_number().is_some_and(is_whole) }
    error(input) {
        if input.is_number() {
            ValidationError::new("fractional", "Number must not have a fractional part")
        } else {
            ValidationError::type_mismatch("integer", kind_of(input))
        }
    }
    fn integer();
}

crate::validator! {
    /// Accepts any JSON number, whole or fractional.
    pub IsFloat for Value;
    rule(input) { input.is_number() }
    error(input) { ValidationError::type_mismatch("number", kind_of(input)) }
    fn float();
}
