//! REST client for the OpenAI chat-completions endpoint.
//!
//! A thin [`reqwest`] wrapper: one request per call, no retries, and no
//! timeout beyond the client default — a failed call is terminal for
//! the request that triggered it and the caller falls back.

use serde::Deserialize;

/// Default API base URL. Overridable for tests and proxies.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for both insight generation and translation.
const MODEL: &str = "gpt-3.5-turbo";

/// HTTP client for the OpenAI chat-completions API.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Errors from the chat-completions client.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API returned 2xx but no usable message content.
    #[error("OpenAI API returned an empty response")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client for the public OpenAI endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against an alternate base URL (e.g. a local
    /// stub server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a single system+user chat exchange and return the
    /// assistant's reply, trimmed.
    pub async fn chat(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        content.ok_or(LlmError::EmptyResponse)
    }
}
