// Connection settings for the question-answering service

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Service endpoint used when nothing is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/ask";

/// Request timeout used when nothing is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for [`crate::HttpQaClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL the question is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout in milliseconds; 0 leaves requests unbounded
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
