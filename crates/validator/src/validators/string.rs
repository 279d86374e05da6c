//! Text predicates
//!
//! Length is measured in Unicode scalar values (chars).

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::foundation::{Validate, ValidationError, kind_of};

// ============================================================================
// IS STRING
// ============================================================================

/// Accepts text, optionally bounded in length and excluding listed values.
///
/// With no bounds the empty string is accepted. A lower bound of `0` accepts
/// it as well; any lower bound above `0` rejects it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vigil_validator::foundation::Validate;
/// use vigil_validator::validators::IsString;
///
/// let rule = IsString::length(1, 5).excluding(["admin"]);
/// assert!(rule.validate(&json!("guest")).is_ok());
/// assert!(rule.validate(&json!("admin")).is_err());
/// assert!(rule.validate(&json!("")).is_err());
/// assert!(rule.validate(&json!(12)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsString {
    min: Option<usize>,
    max: Option<usize>,
    not_allowed: Vec<String>,
}

impl IsString {
    /// Any text, including the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text whose length lies in `[min, max]`.
    #[must_use]
    pub fn length(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            not_allowed: Vec::new(),
        }
    }

    /// Sets the inclusive lower length bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper length bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Adds values the text must not equal.
    #[must_use = "builder methods must be chained or built"]
    pub fn excluding<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_allowed.extend(values.into_iter().map(Into::into));
        self
    }

    /// Adds values the text must not equal, taken from a dynamic list.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] when `values` is not a JSON array or holds a
    /// non-text entry. This is a fault in the caller, not in the request.
    pub fn excluding_value(mut self, values: &Value) -> Result<Self, ConfigurationError> {
        let Value::Array(entries) = values else {
            return Err(ConfigurationError::NotAList {
                argument: "not_allowed",
                found: kind_of(values),
            });
        };

        for (index, entry) in entries.iter().enumerate() {
            match entry {
                Value::String(text) => self.not_allowed.push(text.clone()),
                other => {
                    return Err(ConfigurationError::NotText {
                        argument: "not_allowed",
                        index,
                        found: kind_of(other),
                    });
                }
            }
        }

        Ok(self)
    }

    /// Values the text must not equal.
    #[must_use]
    pub fn not_allowed(&self) -> &[String] {
        &self.not_allowed
    }
}

impl Validate for IsString {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Value::String(text) = input else {
            return Err(ValidationError::type_mismatch("string", kind_of(input)));
        };

        let len = text.chars().count();
        if let Some(min) = self.min
            && len < min
        {
            return Err(ValidationError::min_length(min, len));
        }
        if let Some(max) = self.max
            && len > max
        {
            return Err(ValidationError::max_length(max, len));
        }

        if self.not_allowed.iter().any(|blocked| blocked == text) {
            return Err(ValidationError::forbidden(text.clone()));
        }

        Ok(())
    }
}

// ============================================================================
// STRING ENUM
// ============================================================================

/// Accepts text that is one of the allowed values.
///
/// The empty string is only accepted when it is listed.
#[derive(Debug)]
pub struct StringEnum<'a, S> {
    allowed: &'a [S],
}

impl<'a, S> StringEnum<'a, S> {
    /// Creates the predicate over a borrowed list of allowed values.
    #[must_use]
    pub const fn new(allowed: &'a [S]) -> Self {
        Self { allowed }
    }
}

impl<S: AsRef<str>> Validate for StringEnum<'_, S> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Value::String(text) = input else {
            return Err(ValidationError::type_mismatch("string", kind_of(input)));
        };

        if self.allowed.iter().any(|allowed| allowed.as_ref() == text.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::not_member(self.allowed.len()))
        }
    }
}

/// Creates a [`StringEnum`] predicate.
#[must_use]
pub const fn one_of<S>(allowed: &[S]) -> StringEnum<'_, S> {
    StringEnum::new(allowed)
}

// ============================================================================
// TESTS
// ============================================================================
