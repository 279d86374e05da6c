//! # vigil-params
//!
//! Request parameter objects built on the `vigil-validator` chain.
//!
//! - [`BaseParameters`]: request id and schema headers every request carries
//! - [`FilterParameters`]: sort, projection and paging for listing requests
//! - [`snake_to_camel`]: key normalization for response documents
//!
//! Parameters are read from a [`RawRequest`], which can be built by hand,
//! deserialized from JSON or taken from an `http` request head. Extraction
//! never fails; problems are reported as codes by `validate`.
//!
//! ```
//! use vigil_params::{BaseParameters, RawRequest};
//!
//! let request = RawRequest::new()
//!     .with_header("x-request-id", "5a90c78c-3adb-41f8-b166-2fb38c9baa24")
//!     .with_header("x-involves-schema", "foo_bar");
//!
//! let mut params = BaseParameters::new(Some(&request));
//! assert!(params.validate().is_empty());
//! ```

pub mod base;
pub mod codes;
pub mod config;
pub mod filter;
pub mod normalize;
pub mod request;

pub use base::BaseParameters;
pub use config::{ConfigError, HeaderKeys, ParamsConfig, QueryKeys};
pub use filter::{FieldSelection, FilterParameters, QueryInt, Sort, SortDirection};
pub use normalize::snake_to_camel;
pub use request::RawRequest;
