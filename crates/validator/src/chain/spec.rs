//! Caller-defined error code pairs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::sink::ViolationKind;

/// The pair of codes a field reports: one when the value is missing, one
/// when it is present but malformed.
///
/// Catalogue entries borrow `'static` text; codes loaded from
/// configuration are owned.
///
/// Declare catalogue entries as `static`, not `const`. A `Cow` field has drop
/// glue, so `&CONST` borrows a temporary that dies at the end of the
/// statement and a chain held in a `let` would outlive it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vigil_validator::{ErrorSink, ErrorSpec, validate};
///
/// static LIMIT: ErrorSpec = ErrorSpec::new("LIMIT_IS_REQUIRED", "LIMIT_IS_INVALID");
/// assert_eq!(LIMIT.invalid, "LIMIT_IS_INVALID");
///
/// let mut sink = ErrorSink::new();
/// let limit = json!("ten");
/// let chain = validate(Some(&limit), &LIMIT, &mut sink).is_optional();
/// let chain = chain.is_number();
/// assert!(!chain.passed());
/// assert_eq!(sink.codes(), ["LIMIT_IS_INVALID"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorSpec {
    /// Reported when the value is absent or null and the chain is not optional.
    pub required: Cow<'static, str>,
    /// Reported when the value is present but fails the check.
    pub invalid: Cow<'static, str>,
}

impl ErrorSpec {
    /// Creates a spec from static codes.
    #[must_use]
    pub const fn new(required: &'static str, invalid: &'static str) -> Self {
        Self {
            required: Cow::Borrowed(required),
            invalid: Cow::Borrowed(invalid),
        }
    }

    /// Creates a spec from owned codes.
    #[must_use]
    pub fn owned(required: impl Into<String>, invalid: impl Into<String>) -> Self {
        Self {
            required: Cow::Owned(required.into()),
            invalid: Cow::Owned(invalid.into()),
        }
    }

    /// Returns the code reported for `kind`.
    #[must_use]
    pub fn code(&self, kind: ViolationKind) -> &Cow<'static, str> {
        match kind {
            ViolationKind::Required => &self.required,
            ViolationKind::Invalid => &self.invalid,
        }
    }
}
