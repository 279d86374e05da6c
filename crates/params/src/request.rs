//! Transport-neutral view of an incoming request.

use std::collections::BTreeMap;

use http::{HeaderMap, Uri};
use serde::{Deserialize, Serialize};

/// The query parameters and headers a parameter object reads.
///
/// Both maps hold decoded text. Deserializes from
/// `{"query": {...}, "headers": {...}}`, either map may be omitted.
///
/// # Examples
///
/// ```
/// use vigil_params::RawRequest;
///
/// let request = RawRequest::new()
///     .with_query("limit", "10")
///     .with_header("X-Request-Id", "abc");
///
/// assert_eq!(request.query("limit"), Some("10"));
/// assert_eq!(request.header("x-request-id"), Some("abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Decoded query parameters.
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Header values.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl RawRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from the head of an `http` request.
    ///
    /// Repeated query keys and headers keep their first value. Header values
    /// that are not visible ASCII are skipped.
    #[must_use]
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        Self::from_uri_and_headers(&parts.uri, &parts.headers)
    }

    /// Builds a request from an `http` request, ignoring its body.
    #[must_use]
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self::from_uri_and_headers(request.uri(), request.headers())
    }

    fn from_uri_and_headers(uri: &Uri, headers: &HeaderMap) -> Self {
        let mut request = Self::new();

        if let Some(query) = uri.query() {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                request
                    .query
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }

        for (name, value) in headers {
            match value.to_str() {
                Ok(text) => {
                    request
                        .headers
                        .entry(name.as_str().to_owned())
                        .or_insert_with(|| text.to_owned());
                }
                Err(_) => tracing::debug!(header = %name, "skipping non-ASCII header value"),
            }
        }

        request
    }

    /// Adds a query parameter, replacing any previous value.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a header, replacing any previous value. Names are stored lowercase.
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Returns the query parameter `key`.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns the header `name`, compared ASCII case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.headers.get(name) {
            return Some(value);
        }
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
