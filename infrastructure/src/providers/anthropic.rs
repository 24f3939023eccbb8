//! Anthropic Messages API adapter

use super::ProviderSpec;
use super::http::{non_empty, send_json};
use crate::credentials::ApiKey;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use verdict_application::{Deadline, Provider, ProviderError};
use verdict_domain::ProviderName;

const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    name: ProviderName,
    enabled: bool,
    api_key: Option<ApiKey>,
    base_url: String,
    model: String,
    max_tokens: u32,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicProvider {
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
}

#[async_trait]
impl Provider for AnthropicProvider {
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

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let request = self
            .http_client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key.expose())
            .header("anthropic-version", API_VERSION)
            .json(&body);

        let response: MessagesResponse = send_json(request, deadline).await?;

        let text: String = response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");
        non_empty(text)
    }
}
