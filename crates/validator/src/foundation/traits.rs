//! Core traits for the validation system
//!
//! Every shape predicate the chain can run implements [`Validate`].

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all predicates implement.
///
/// A predicate inspects a value that is already known to be present (the
/// chain handles `null`/absent before calling it) and either accepts it or
/// explains why it does not fit.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use vigil_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(ValidationError::new("even", "Value must be an even integer")),
///         }
///     }
/// }
///
/// assert!(Even.validate(&json!(2)).is_ok());
/// assert!(Even.validate(&json!(3)).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value satisfies the predicate
    /// * `Err(ValidationError)` describing the mismatch otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Validate::validate) accepts the input.
    fn accepts(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
