//! Error codes and header names shared by the parameter objects.

use vigil_validator::ErrorSpec;

pub static ASC: ErrorSpec = ErrorSpec::new("ASC_IS_REQUIRED", "ASC_IS_INVALID");
pub static DESC: ErrorSpec = ErrorSpec::new("DESC_IS_REQUIRED", "DESC_IS_INVALID");
pub static FIELDS: ErrorSpec = ErrorSpec::new("FIELDS_IS_REQUIRED", "FIELDS_IS_INVALID");
pub static LIMIT: ErrorSpec = ErrorSpec::new("LIMIT_IS_REQUIRED", "LIMIT_IS_INVALID");
pub static OFFSET: ErrorSpec = ErrorSpec::new("OFFSET_IS_REQUIRED", "OFFSET_IS_INVALID");

/// The invalid code has no `_IS_` infix; clients match on it verbatim.
pub static REQUEST_ID: ErrorSpec = ErrorSpec::new("REQUEST_ID_IS_REQUIRED", "REQUEST_ID_INVALID");
pub static SCHEMA: ErrorSpec = ErrorSpec::new("SCHEMA_IS_REQUIRED", "SCHEMA_IS_INVALID");

/// Header carrying the request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// Header naming the schema the request involves.
pub const SCHEMA_HEADER: &str = "x-involves-schema";
