//! Header parameters every request carries

use serde_json::Value;
use vigil_validator::{ErrorSink, validate};

use crate::codes;
use crate::config::ParamsConfig;
use crate::request::RawRequest;

/// The request id and schema headers of one request.
///
/// Extraction never fails: missing headers are recorded as absent and
/// reported by [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use vigil_params::{BaseParameters, RawRequest};
///
/// let mut params = BaseParameters::new(Some(&RawRequest::new()));
/// let errors = params.validate();
///
/// assert_eq!(errors.codes(), ["REQUEST_ID_IS_REQUIRED", "SCHEMA_IS_REQUIRED"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseParameters {
    request_id: Option<String>,
    schema: Option<String>,
    request_id_length: usize,
    errors: ErrorSink,
}

impl BaseParameters {
    /// Extracts headers using the default configuration. `None` stands for a
    /// missing request and yields both headers absent.
    #[must_use]
    pub fn new(request: Option<&RawRequest>) -> Self {
        Self::with_config(request, &ParamsConfig::default())
    }

    /// Extracts headers named by `config`.
    #[must_use]
    pub fn with_config(request: Option<&RawRequest>, config: &ParamsConfig) -> Self {
        let header = |name: &str| request.and_then(|r| r.header(name)).map(str::to_owned);

        Self {
            request_id: header(&config.headers.request_id),
            schema: header(&config.headers.schema),
            request_id_length: config.request_id_length,
            errors: ErrorSink::new(),
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Validates both headers and returns the accumulated errors.
    ///
    /// Codes are appended in order: request id, then schema. Each call
    /// appends to the same sink.
    pub fn validate(&mut self) -> &ErrorSink {
        let request_id = self.request_id.clone().map(Value::String);
        let schema = self.schema.clone().map(Value::String);
        let n = self.request_id_length;

        validate(request_id.as_ref(), &codes::REQUEST_ID, &mut self.errors).is_string_len(n, n);
        validate(schema.as_ref(), &codes::SCHEMA, &mut self.errors).is_string_len(1, usize::MAX);

        tracing::debug!(errors = self.errors.len(), "base parameters validated");
        &self.errors
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &ErrorSink {
        &self.errors
    }

    /// Consumes the parameters, returning the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> ErrorSink {
        self.errors
    }
}
