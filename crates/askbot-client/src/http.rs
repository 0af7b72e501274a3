// HTTP implementation of QaClient

use crate::config::ClientConfig;
use crate::error::TransportFailure;
use crate::traits::{AskRequest, AskResponse, QaClient};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

/// Question-answering client (plain JSON over HTTP POST)
#[derive(Debug, Clone)]
pub struct HttpQaClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpQaClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint,
        })
    }

    /// Client for the default local endpoint
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QaClient for HttpQaClient {
    async fn ask(&self, request: AskRequest) -> Result<AskResponse, TransportFailure> {
        tracing::debug!(
            endpoint = %self.endpoint,
            question_chars = request.question.chars().count(),
            context_chars = request.context.chars().count(),
            "sending question"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(TransportFailure::new(format!(
                "status={}, body={}",
                status, body
            )));
        }

        let bytes = response.bytes().await?;
        let answer: AskResponse = serde_json::from_slice(&bytes)?;
        Ok(answer)
    }
}
