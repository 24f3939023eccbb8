//! Provider adapters
//!
//! Each vendor integration is one implementation of the application's
//! [`Provider`](verdict_application::Provider) capability. The registry picks
//! the adapter from the provider's [`ProviderKind`].

pub mod anthropic;
pub mod echo;
mod http;
pub mod openai;
pub mod registry;

use crate::config::FileProviderConfig;
use crate::credentials::ApiKey;
use verdict_domain::ProviderName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Echo,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Echo => "echo",
        }
    }

    /// Kind implied by a provider name alone
    pub fn builtin(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn needs_credential(&self) -> bool {
        !matches!(self, ProviderKind::Echo)
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com",
            ProviderKind::Anthropic => "https://api.anthropic.com",
            ProviderKind::Echo => "",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-5-haiku-latest",
            ProviderKind::Echo => "echo",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "echo" => Ok(ProviderKind::Echo),
            other => Err(format!("unknown provider kind '{}'", other)),
        }
    }
}

/// Fully resolved settings of one provider, file overrides applied
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub name: ProviderName,
    pub kind: ProviderKind,
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_key_env: String,
}

impl ProviderSettings {
    pub const DEFAULT_MAX_TOKENS: u32 = 1024;

    pub fn new(name: ProviderName, kind: ProviderKind, enabled: bool) -> Self {
        Self {
            api_key_env: name.api_key_env(),
            name,
            kind,
            enabled,
            base_url: kind.default_base_url().to_string(),
            model: kind.default_model().to_string(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }

    /// Apply the non-empty fields of a `providers.<name>` entry
    pub fn with_overrides(mut self, entry: &FileProviderConfig) -> Self {
        if let Some(base_url) = &entry.base_url {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = &entry.model {
            self.model = model.clone();
        }
        if let Some(max_tokens) = entry.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(env_var) = &entry.api_key_env {
            self.api_key_env = env_var.clone();
        }
        self
    }
}

/// Settings plus the key they need, handed to an adapter's constructor
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    pub settings: ProviderSettings,
    pub api_key: Option<ApiKey>,
}
