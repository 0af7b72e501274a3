use thiserror::Error;

/// Any problem obtaining an answer from the service.
///
/// Network errors, non-2xx statuses and malformed bodies all collapse into
/// this one kind; the message exists for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transport failure: {message}")]
pub struct TransportFailure {
    message: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for TransportFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed response body: {}", err))
    }
}
