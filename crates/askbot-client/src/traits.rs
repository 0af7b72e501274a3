use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TransportFailure;

/// Trait for the remote question-answering service
///
/// One request, one answer: no streaming, no retries.
#[async_trait]
pub trait QaClient: Send + Sync {
    async fn ask(&self, request: AskRequest) -> Result<AskResponse, TransportFailure>;
}

/// Request body: `{"question": ..., "context": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub context: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: context.into(),
        }
    }
}

/// Success body: `{"answer": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
