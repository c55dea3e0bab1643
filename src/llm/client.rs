use async_trait::async_trait;
use tracing::{debug, info};

use super::types::*;
use crate::config::LlmConfig;

/// Anything that can turn a system prompt and a user message into a
/// completion text.
#[async_trait]
pub trait MovieOracle: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

// Upstream error bodies can be large HTML pages.
const MAX_ERROR_BODY: usize = 512;

impl ChatClient {
    pub fn new(config: &LlmConfig, api_key: String) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl MovieOracle for ChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat::json_object(),
            stream: false,
        };

        debug!(url = %url, model = %self.model, "Sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(LlmError::Status(status.as_u16(), body));
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(ref usage) = chat.usage {
            info!(
                model = chat.model.as_deref().unwrap_or(&self.model),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion received"
            );
        }

        if let Some(choice) = chat.choices.first() {
            debug!(finish_reason = ?choice.finish_reason, "First completion choice");
        }

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider returned status {0}: {1}")]
    Status(u16, String),
    #[error("Provider returned no completion content")]
    EmptyCompletion,
}
