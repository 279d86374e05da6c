//! # vigil-validator
//!
//! A fluent validation chain for HTTP request inputs.
//!
//! Each field of a request gets one chain: bind the value, the field's
//! [`ErrorSpec`] and the pass-wide [`ErrorSink`], then apply checks. Failures
//! become codes in the sink instead of early returns, so one pass reports
//! every problem with the request.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use vigil_validator::prelude::*;
//!
//! static REQUEST_ID: ErrorSpec = ErrorSpec::new("REQUEST_ID_IS_REQUIRED", "REQUEST_ID_INVALID");
//! static SCHEMA: ErrorSpec = ErrorSpec::new("SCHEMA_IS_REQUIRED", "SCHEMA_IS_INVALID");
//!
//! let mut sink = ErrorSink::new();
//! let request_id = json!("5a90c78c-3adb-41f8-b166-2fb38c9baa24");
//!
//! validate(Some(&request_id), &REQUEST_ID, &mut sink).is_string_len(36, 36);
//! validate(None, &SCHEMA, &mut sink).is_string();
//!
//! assert_eq!(sink.codes(), ["SCHEMA_IS_REQUIRED"]);
//! ```
//!
//! ## Checks
//!
//! Text ([`is_string`](Chain::is_string), [`is_string_len`](Chain::is_string_len),
//! [`is_string_with`](Chain::is_string_with), [`is_string_enum`](Chain::is_string_enum)),
//! numbers ([`is_number`](Chain::is_number), [`is_float`](Chain::is_float)),
//! [`is_boolean`](Chain::is_boolean), formats ([`is_date_iso`](Chain::is_date_iso),
//! [`is_email`](Chain::is_email), [`is_uuid`](Chain::is_uuid)), objects
//! ([`is_object`](Chain::is_object), [`is_object_not_empty`](Chain::is_object_not_empty),
//! [`is_object_id`](Chain::is_object_id)), arrays ([`is_array`](Chain::is_array),
//! [`is_array_not_empty`](Chain::is_array_not_empty),
//! [`is_array_match`](Chain::is_array_match)) and [`custom`](Chain::custom).
//!
//! Any type implementing [`Validate`](foundation::Validate) over
//! `serde_json::Value` can run through [`Chain::check`].

pub mod chain;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use chain::{
    Chain, ErrorSink, ErrorSpec, Violation, ViolationKind, validate, validate_with_prefix,
};
pub use error::ConfigurationError;
