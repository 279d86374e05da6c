//! Errors raised by misuse of the validation API.
//!
//! Bad request data never produces an error here; it is recorded in the
//! [`ErrorSink`](crate::ErrorSink). A [`ConfigurationError`] means the caller
//! handed a check malformed arguments, and it must abort the validation pass.

use thiserror::Error;

/// A check was configured with malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// An argument that must be a list was something else.
    #[error("`{argument}` must be a list, got {found}")]
    NotAList {
        /// Name of the offending argument.
        argument: &'static str,
        /// JSON type that was supplied instead.
        found: &'static str,
    },

    /// A list entry that must be text was something else.
    #[error("`{argument}` entry {index} must be text, got {found}")]
    NotText {
        /// Name of the offending argument.
        argument: &'static str,
        /// Position of the entry in the list.
        index: usize,
        /// JSON type that was supplied instead.
        found: &'static str,
    },
}
