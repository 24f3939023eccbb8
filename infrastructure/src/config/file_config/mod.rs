//! Raw configuration data types
//!
//! These structs represent the exact structure of the config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod providers;

pub use output::FileOutputConfig;
pub use providers::FileProviderConfig;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use verdict_domain::ProviderName;

/// Provider kinds a `providers.<name>.kind` entry may name
pub const KNOWN_KINDS: [&str; 3] = ["openai", "anthropic", "echo"];

/// Complete file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider name -> enabled
    #[serde(alias = "EnabledProviders")]
    pub enabled_providers: BTreeMap<String, bool>,
    /// Enable debug logging
    #[serde(alias = "Debug")]
    pub debug: bool,
    /// Deadline for the whole run, in seconds
    pub timeout_seconds: u64,
    /// Summarizer used when `--summarizer` is not given
    pub summarizer: Option<String>,
    /// Per-provider overrides
    pub providers: BTreeMap<String, FileProviderConfig>,
    /// Output settings
    pub output: FileOutputConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled_providers: BTreeMap::new(),
            debug: false,
            timeout_seconds: 60,
            summarizer: None,
            providers: BTreeMap::new(),
            output: FileOutputConfig::default(),
        }
    }
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl FileConfig {
    /// Names of the providers switched on, in name order
    pub fn enabled_names(&self) -> impl Iterator<Item = &str> {
        self.enabled_providers
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error("timeout_seconds cannot be 0"));
        }

        for name in self.enabled_providers.keys().chain(self.providers.keys()) {
            if ProviderName::new(name.as_str()).is_err() {
                issues.push(ConfigIssue::error(format!(
                    "invalid provider name {:?}: names must be non-empty and contain no whitespace",
                    name
                )));
            }
        }

        for (name, entry) in &self.providers {
            if let Some(kind) = &entry.kind
                && !KNOWN_KINDS.contains(&kind.as_str())
            {
                issues.push(ConfigIssue::error(format!(
                    "providers.{}.kind: unknown value '{}' (expected one of {})",
                    name,
                    kind,
                    KNOWN_KINDS.join(", ")
                )));
            }
            if !self.enabled_providers.contains_key(name) {
                issues.push(ConfigIssue::warning(format!(
                    "providers.{} is configured but not listed in enabled_providers",
                    name
                )));
            }
        }

        if self.enabled_names().next().is_none() {
            issues.push(ConfigIssue::warning(
                "no provider is enabled; list providers under enabled_providers",
            ));
        }

        for name in self.enabled_names() {
            let has_kind = self
                .providers
                .get(name)
                .and_then(|entry| entry.kind.as_ref())
                .is_some();
            if !has_kind && !KNOWN_KINDS.contains(&name) {
                issues.push(ConfigIssue::error(format!(
                    "provider '{}' is not built in; set providers.{}.kind",
                    name, name
                )));
            }
        }

        issues
    }
}
