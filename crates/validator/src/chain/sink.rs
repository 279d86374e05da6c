//! Error accumulation for one validation pass

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::foundation::ValidationError;

/// Why a check appended a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value was absent or null and the chain was not optional.
    Required,
    /// The value was present but failed the check.
    Invalid,
}

/// One entry of an [`ErrorSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    code: Cow<'static, str>,
    kind: ViolationKind,
    detail: Option<ValidationError>,
}

impl Violation {
    pub(crate) fn new(
        code: Cow<'static, str>,
        kind: ViolationKind,
        detail: Option<ValidationError>,
    ) -> Self {
        Self { code, kind, detail }
    }

    /// The reported code, prefix included.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the value was missing or malformed.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The predicate's explanation. Always `None` for required violations.
    #[must_use]
    pub fn detail(&self) -> Option<&ValidationError> {
        self.detail.as_ref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({detail})", self.code),
            None => f.write_str(&self.code),
        }
    }
}

// ============================================================================
// ERROR SINK
// ============================================================================

/// Ordered, append-only list of violations for one validation pass.
///
/// The pass owns the sink and lends it to each chain with `&mut`. Entries
/// keep call order and are never deduplicated. A non-empty sink means the
/// request is invalid.
///
/// Serializes as a JSON array of codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSink {
    violations: Vec<Violation>,
}

impl ErrorSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns true if any code was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Returns true if no code was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of recorded codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// All violations in call order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterates over violations in call order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// The recorded codes in call order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.violations.iter().map(Violation::code).collect()
    }

    /// Returns true if `code` was recorded at least once.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.violations.iter().any(|v| v.code() == code)
    }

    /// Consumes the sink, returning the codes in call order.
    #[must_use]
    pub fn into_codes(self) -> Vec<String> {
        self.violations
            .into_iter()
            .map(|v| v.code.into_owned())
            .collect()
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ErrorSink> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a ErrorSink {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl Serialize for ErrorSink {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.violations.len()))?;
        for violation in &self.violations {
            seq.serialize_element(violation.code())?;
        }
        seq.end()
    }
}

impl fmt::Display for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorSink {}
