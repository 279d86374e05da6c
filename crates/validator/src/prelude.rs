//! Prelude module for convenient imports.
//!
//! Provides a single `use vigil_validator::prelude::*;` import that brings
//! in the chain entry points, the sink and spec types, the predicate trait,
//! and every built-in predicate.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vigil_validator::prelude::*;
//!
//! static AGE: ErrorSpec = ErrorSpec::new("AGE_IS_REQUIRED", "AGE_IS_INVALID");
//!
//! let mut sink = ErrorSink::new();
//! validate(Some(&json!(42)), &AGE, &mut sink).is_number();
//! assert!(sink.is_empty());
//! ```

// ============================================================================
// CHAIN: entry points, accumulator, error codes
// ============================================================================

pub use crate::chain::{
    Chain, ErrorSink, ErrorSpec, Violation, ViolationKind, validate, validate_with_prefix,
};
pub use crate::error::ConfigurationError;

// ============================================================================
// FOUNDATION: predicate trait and diagnostics
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, kind_of};

// ============================================================================
// VALIDATORS: All built-in predicates
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
