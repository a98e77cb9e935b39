// Handler failure type surfaced on the wire as a generic error envelope

use serde_json::Value;
use thiserror::Error;

/// A failure raised by a method handler.
///
/// Handlers that want a specific protocol-level error populate `code`,
/// `message` and `data`; anything left unset is defaulted when the
/// envelope is built (internal-error code, empty message, data omitted).
/// `Default` is the fully uninspected failure.
#[derive(Debug, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or("unclassified handler failure"))]
pub struct HandlerError {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub data: Option<Value>,
}

/// Result type alias for handler invocations.
pub type HandlerResult = std::result::Result<Value, HandlerError>;

impl HandlerError {
    /// Failure with a message and the default internal-error code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure with an explicit protocol-level code.
    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
            data: None,
        }
    }

    /// Attach structured error data.
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

// Handlers decode their params with `?`.
impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::new(err.to_string())
    }
}
