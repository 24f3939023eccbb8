//! OpenAI-compatible chat completions adapter
//!
//! Works against api.openai.com and any server exposing the same
//! `/v1/chat/completions` endpoint (set `base_url`).

use super::ProviderSpec;
use super::http::{non_empty, send_json};
use crate::credentials::ApiKey;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use verdict_application::{Deadline, Provider, ProviderError};
use verdict_domain::ProviderName;

pub struct OpenAiProvider {
    name: ProviderName,
    enabled: bool,
    api_key: Option<ApiKey>,
    base_url: String,
    model: String,
    max_tokens: u32,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(spec: ProviderSpec, http_client: Client) -> Self {
        let settings = spec.settings;
        Self {
            name: settings.name,
            enabled: settings.enabled,
            api_key: spec.api_key,
            base_url: settings.base_url,
            model: settings.model,
            max_tokens: settings.max_tokens,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &ProviderName {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn query(&self, prompt: &str, deadline: &Deadline) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::Other(format!("No API key for {}", self.name)))?;

        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let request = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(api_key.expose())
            .json(&body);

        let response: ChatResponse = send_json(request, deadline).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        non_empty(content)
    }
}
