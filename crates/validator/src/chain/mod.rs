//! The fluent validation chain
//!
//! A chain binds one candidate value, an [`ErrorSpec`] and a borrowed
//! [`ErrorSink`]. Each call consumes the chain and returns the next step, so a
//! chain cannot outlive the expression that built it and cannot be reused for
//! another field.
//!
//! Every check shares one policy:
//!
//! 1. value absent or `null`: optional chains pass silently, others append
//!    `prefix + required`;
//! 2. value present: run the predicate and append `prefix + invalid` on
//!    failure.
//!
//! A single check appends at most one code.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vigil_validator::{ErrorSink, ErrorSpec, validate};
//!
//! static LIMIT: ErrorSpec = ErrorSpec::new("LIMIT_IS_REQUIRED", "LIMIT_IS_INVALID");
//!
//! let mut sink = ErrorSink::new();
//! let limit = json!(1.5);
//!
//! validate(Some(&limit), &LIMIT, &mut sink).is_optional().is_number();
//! validate(None, &LIMIT, &mut sink).is_optional().is_number();
//!
//! assert_eq!(sink.codes(), ["LIMIT_IS_INVALID"]);
//! ```

pub mod sink;
pub mod spec;

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::validators::{
    ArrayMatch, IsString, StringEnum, array, array_not_empty, boolean, custom, date_iso, email,
    float, integer, object, object_id, object_not_empty, uuid,
};

pub use sink::{ErrorSink, Violation, ViolationKind};
pub use spec::ErrorSpec;

/// Starts a chain over `value`.
///
/// `None` means the value is absent; `Some(&Value::Null)` is treated the
/// same way.
pub fn validate<'a>(
    value: Option<&'a Value>,
    spec: &'a ErrorSpec,
    sink: &'a mut ErrorSink,
) -> Chain<'a> {
    validate_with_prefix(value, spec, sink, "")
}

/// Starts a chain whose codes are prefixed with `prefix`.
///
/// Used to tell apart fields that share base codes, e.g. array items.
pub fn validate_with_prefix<'a>(
    value: Option<&'a Value>,
    spec: &'a ErrorSpec,
    sink: &'a mut ErrorSink,
    prefix: &'a str,
) -> Chain<'a> {
    Chain {
        value,
        spec,
        sink,
        prefix,
        optional: false,
        last_passed: true,
    }
}

/// One step of a validation chain. See the [module docs](self).
#[derive(Debug)]
pub struct Chain<'a> {
    value: Option<&'a Value>,
    spec: &'a ErrorSpec,
    sink: &'a mut ErrorSink,
    prefix: &'a str,
    optional: bool,
    last_passed: bool,
}

impl<'a> Chain<'a> {
    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Lets every later check pass silently when the value is absent or null.
    pub fn is_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Calls `callback` once if the most recent check appended nothing.
    ///
    /// A chain with no check yet counts as valid.
    pub fn is_valid<F: FnOnce()>(self, callback: F) -> Self {
        if self.last_passed {
            callback();
        }
        self
    }

    /// Whether the most recent check appended nothing.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.last_passed
    }

    // ------------------------------------------------------------------
    // Gate
    // ------------------------------------------------------------------

    /// Runs any predicate through the required/optional gate.
    pub fn check<P>(mut self, predicate: &P) -> Self
    where
        P: Validate<Input = Value> + ?Sized,
    {
        let Some(value) = self.value.filter(|v| !v.is_null()) else {
            if self.optional {
                self.last_passed = true;
            } else {
                self.record(ViolationKind::Required, None);
            }
            return self;
        };

        match predicate.validate(value) {
            Ok(()) => self.last_passed = true,
            Err(detail) => self.record(ViolationKind::Invalid, Some(detail)),
        }
        self
    }

    fn record(&mut self, kind: ViolationKind, detail: Option<ValidationError>) {
        let base = self.spec.code(kind);
        let code = if self.prefix.is_empty() {
            base.clone()
        } else {
            Cow::Owned(format!("{}{}", self.prefix, base))
        };

        tracing::trace!(
            code = %code,
            kind = ?kind,
            detail = detail.as_ref().map(tracing::field::display),
            "validation check failed"
        );

        self.sink.push(Violation::new(code, kind, detail));
        self.last_passed = false;
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Text of any length, the empty string included.
    pub fn is_string(self) -> Self {
        self.check(&IsString::new())
    }

    /// Text whose char length lies in `[min, max]`.
    pub fn is_string_len(self, min: usize, max: usize) -> Self {
        self.check(&IsString::length(min, max))
    }

    /// Text satisfying a configured [`IsString`] rule.
    pub fn is_string_with(self, rule: &IsString) -> Self {
        self.check(rule)
    }

    /// Text that is one of `allowed`.
    pub fn is_string_enum<S: AsRef<str>>(self, allowed: &[S]) -> Self {
        self.check(&StringEnum::new(allowed))
    }

    // ------------------------------------------------------------------
    // Numbers and booleans
    // ------------------------------------------------------------------

    /// A JSON number without a fractional part.
    pub fn is_number(self) -> Self {
        self.check(&integer())
    }

    /// Any JSON number.
    pub fn is_float(self) -> Self {
        self.check(&float())
    }

    /// `true` or `false`.
    pub fn is_boolean(self) -> Self {
        self.check(&boolean())
    }

    // ------------------------------------------------------------------
    // Formats
    // ------------------------------------------------------------------

    /// An ISO-8601 date or date-time string.
    pub fn is_date_iso(self) -> Self {
        self.check(&date_iso())
    }

    /// An email address.
    pub fn is_email(self) -> Self {
        self.check(&email())
    }

    /// A version 1 or version 4 UUID string.
    pub fn is_uuid(self) -> Self {
        self.check(&uuid())
    }

    // ------------------------------------------------------------------
    // Objects
    // ------------------------------------------------------------------

    /// A JSON object.
    pub fn is_object(self) -> Self {
        self.check(&object())
    }

    /// A JSON object with at least one key.
    pub fn is_object_not_empty(self) -> Self {
        self.check(&object_not_empty())
    }

    /// A database object identifier, or any number.
    pub fn is_object_id(self) -> Self {
        self.check(&object_id())
    }

    // ------------------------------------------------------------------
    // Arrays
    // ------------------------------------------------------------------

    /// A JSON array.
    pub fn is_array(self) -> Self {
        self.check(&array())
    }

    /// A JSON array with at least one element.
    pub fn is_array_not_empty(self) -> Self {
        self.check(&array_not_empty())
    }

    /// A JSON array whose every element equals one of `allowed`.
    pub fn is_array_match<T>(self, allowed: &[T]) -> Self
    where
        Value: PartialEq<T>,
    {
        self.check(&ArrayMatch::new(allowed))
    }

    // ------------------------------------------------------------------
    // Custom
    // ------------------------------------------------------------------

    /// A value accepted by `predicate`.
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool,
    {
        self.check(&custom(predicate))
    }
}
