//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::domain::{ApiConfig, AppError, ChatReply, ChatRequest, Credential};
use crate::ports::ChatClient;

/// HTTP transport for an OpenAI-compatible chat-completion endpoint.
///
/// One request per call, no retries. Status codes are not inspected: the
/// body is handed back as-is and judged by completion extraction.
#[derive(Clone)]
pub struct HttpChatClient {
    credential: Credential,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("api_url", &self.api_url)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    /// Create a new HTTP client with the given credential and configuration.
    pub fn new(credential: Credential, config: &ApiConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.url).map_err(|e| {
            AppError::config_error(format!("Invalid API URL '{}': {}", config.url, e))
        })?;

        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { credential, api_url, client })
    }
}

impl ChatClient for HttpChatClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatReply, AppError> {
        let body = request.to_json()?;
        tracing::debug!(
            url = %self.api_url,
            model = %request.model,
            bytes = body.len(),
            "sending chat request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.credential.expose()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;
        tracing::debug!(status = status.as_u16(), bytes = body_text.len(), "received chat reply");

        Ok(ChatReply::new(body_text))
    }
}
