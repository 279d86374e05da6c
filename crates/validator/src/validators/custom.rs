//! Caller-supplied predicates

use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Wraps a closure as a predicate.
///
/// The closure only sees present values; absence is decided by the chain.
pub struct Custom<F> {
    predicate: F,
}

impl<F> Custom<F>
where
    F: Fn(&Value) -> bool,
{
    /// Wraps `predicate`.
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

impl<F> Validate for Custom<F>
where
    F: Fn(&Value) -> bool,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::new("custom", "Custom predicate rejected the value"))
        }
    }
}

/// Creates a [`Custom`] predicate.
pub const fn custom<F>(predicate: F) -> Custom<F>
where
    F: Fn(&Value) -> bool,
{
    Custom::new(predicate)
}
