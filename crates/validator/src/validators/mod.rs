//! Built-in predicates
//!
//! Every predicate implements [`Validate`](crate::foundation::Validate) over
//! `serde_json::Value` and can be used alone or through the chain.
//!
//! # Categories
//!
//! - **Text**: [`IsString`], [`StringEnum`]
//! - **Numeric**: [`IsNumber`] (whole numbers), [`IsFloat`]
//! - **Logical**: [`IsBoolean`]
//! - **Object**: [`IsObject`], [`ObjectNotEmpty`], [`ObjectId`]
//! - **Format**: [`Email`], [`Uuid`], [`DateIso`]
//! - **Collection**: [`IsArray`], [`ArrayNotEmpty`], [`ArrayMatch`]
//! - **Custom**: [`Custom`]
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vigil_validator::foundation::Validate;
//! use vigil_validator::validators::{email, integer};
//!
//! assert!(email().validate(&json!("user@example.com")).is_ok());
//! assert!(integer().validate(&json!(1.5)).is_err());
//! ```

pub mod boolean;
pub mod collection;
pub mod content;
pub mod custom;
pub mod numeric;
pub mod object;
pub mod string;

pub use boolean::{IsBoolean, boolean};
pub use collection::{ArrayMatch, ArrayNotEmpty, IsArray, array, array_match, array_not_empty};
pub use content::{DateIso, Email, Uuid, date_iso, email, uuid};
pub use custom::{Custom, custom};
pub use numeric::{IsFloat, IsNumber, float, integer};
pub use object::{
    IsObject, OBJECT_ID_KEY, ObjectId, ObjectNotEmpty, object, object_id, object_not_empty,
};
pub use string::{IsString, StringEnum, one_of};
