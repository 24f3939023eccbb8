//! Per-provider settings (`providers` section)

use serde::{Deserialize, Serialize};

/// Optional overrides for one provider
///
/// Built-in names (`openai`, `anthropic`, `echo`) need no entry at all.
/// Any other name must set `kind` to one of those adapters, which lets a
/// user point an OpenAI-compatible endpoint at a name of their choosing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Adapter to use: "openai", "anthropic" or "echo"
    pub kind: Option<String>,
    /// Base URL of the API (without the `/v1/...` path)
    pub base_url: Option<String>,
    /// Model requested from the API
    pub model: Option<String>,
    /// Max tokens per answer
    pub max_tokens: Option<u32>,
    /// Environment variable holding the API key (default: `<NAME>_API_KEY`)
    pub api_key_env: Option<String>,
}
