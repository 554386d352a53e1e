//! Intent resolution error types.

use thiserror::Error;

/// Errors raised while building the rule engine.
///
/// Resolution itself never fails: an unrecognized request is
/// `Intent::Unknown`, and a field that cannot be extracted is simply absent.
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field pattern `{pattern}` has no capture group")]
    MissingCapture { pattern: String },
}

/// Convenience alias for intent engine results.
pub type IntentResult<T> = Result<T, IntentError>;
