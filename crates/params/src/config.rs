//! Parameter configuration
//!
//! Key names and limits the parameter objects read. Every field has a
//! default matching the built-in catalogue, so an empty document is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes;

/// Configuration for [`BaseParameters`](crate::BaseParameters) and
/// [`FilterParameters`](crate::FilterParameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    /// Header names.
    pub headers: HeaderKeys,
    /// Query parameter names.
    pub query: QueryKeys,
    /// Exact char length of a request id.
    pub request_id_length: usize,
}

/// Header names read by [`BaseParameters`](crate::BaseParameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderKeys {
    pub request_id: String,
    pub schema: String,
}

/// Query parameter names read by [`FilterParameters`](crate::FilterParameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryKeys {
    pub asc: String,
    pub desc: String,
    pub offset: String,
    pub limit: String,
    pub fields: String,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            headers: HeaderKeys::default(),
            query: QueryKeys::default(),
            request_id_length: 36,
        }
    }
}

impl Default for HeaderKeys {
    fn default() -> Self {
        Self {
            request_id: codes::REQUEST_ID_HEADER.to_string(),
            schema: codes::SCHEMA_HEADER.to_string(),
        }
    }
}

impl Default for QueryKeys {
    fn default() -> Self {
        Self {
            asc: "asc".to_string(),
            desc: "desc".to_string(),
            offset: "offset".to_string(),
            limit: "limit".to_string(),
            fields: "fields".to_string(),
        }
    }
}

/// A [`ParamsConfig`] that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A header or query key name is empty.
    #[error("{section}.{key} must not be empty")]
    EmptyKey {
        section: &'static str,
        key: &'static str,
    },

    /// `request_id_length` is zero.
    #[error("request_id_length must be greater than zero")]
    ZeroRequestIdLength,
}

impl ParamsConfig {
    /// Checks that every key is named and the request id length is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [
            ("headers", "request_id", &self.headers.request_id),
            ("headers", "schema", &self.headers.schema),
            ("query", "asc", &self.query.asc),
            ("query", "desc", &self.query.desc),
            ("query", "offset", &self.query.offset),
            ("query", "limit", &self.query.limit),
            ("query", "fields", &self.query.fields),
        ];

        if let Some((section, key, _)) = keys.into_iter().find(|(_, _, name)| name.is_empty())
        {
            return Err(ConfigError::EmptyKey { section, key });
        }

        if self.request_id_length == 0 {
            return Err(ConfigError::ZeroRequestIdLength);
        }

        Ok(())
    }
}
