//! Provider registry
//!
//! Turns the `enabled_providers` table into concrete adapters. Names are the
//! table keys, so every registered provider name is unique.

use super::anthropic::AnthropicProvider;
use super::echo::EchoProvider;
use super::openai::OpenAiProvider;
use super::{ProviderKind, ProviderSettings, ProviderSpec};
use crate::config::FileConfig;
use crate::credentials::{CredentialRequirement, Credentials};
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use verdict_application::Provider;
use verdict_domain::ProviderName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown provider '{0}': set providers.{0}.kind")]
    UnknownProvider(String),

    #[error("Invalid provider name {0:?}")]
    InvalidName(String),

    #[error("Provider {name}: {message}")]
    UnknownKind { name: String, message: String },

    #[error("Missing API key for provider {provider}: set {env_var}")]
    MissingCredential { provider: String, env_var: String },
}

pub struct ProviderRegistry {
    providers: BTreeMap<ProviderName, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Credentials the enabled providers need before [`build`](Self::build)
    pub fn required_credentials(
        config: &FileConfig,
    ) -> Result<Vec<CredentialRequirement>, RegistryError> {
        Ok(resolve_settings(config)?
            .into_iter()
            .filter(|s| s.enabled && s.kind.needs_credential())
            .map(|s| CredentialRequirement {
                provider: s.name,
                env_var: s.api_key_env,
            })
            .collect())
    }

    pub fn build(config: &FileConfig, credentials: &Credentials) -> Result<Self, RegistryError> {
        let http_client = Client::new();
        let mut providers = BTreeMap::new();

        for settings in resolve_settings(config)? {
            let api_key = credentials.get(&settings.name).cloned();
            if settings.enabled && settings.kind.needs_credential() && api_key.is_none() {
                return Err(RegistryError::MissingCredential {
                    provider: settings.name.to_string(),
                    env_var: settings.api_key_env,
                });
            }

            debug!(
                provider = %settings.name,
                kind = %settings.kind,
                enabled = settings.enabled,
                model = %settings.model,
                "Registering provider"
            );

            let name = settings.name.clone();
            let spec = ProviderSpec { settings, api_key };
            let provider: Arc<dyn Provider> = match spec.settings.kind {
                ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(spec, http_client.clone())),
                ProviderKind::Anthropic => {
                    Arc::new(AnthropicProvider::new(spec, http_client.clone()))
                }
                ProviderKind::Echo => Arc::new(EchoProvider::new(spec)),
            };
            providers.insert(name, provider);
        }

        let registry = Self { providers };
        info!(
            registered = registry.len(),
            enabled = registry.enabled().len(),
            "Providers resolved"
        );
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, provider)| Arc::clone(provider))
    }

    /// Every registered provider, enabled or not, in name order
    pub fn all(&self) -> Vec<Arc<dyn Provider>> {
        self.providers.values().cloned().collect()
    }

    /// Enabled providers in name order
    pub fn enabled(&self) -> Vec<Arc<dyn Provider>> {
        self.providers
            .values()
            .filter(|p| p.is_enabled())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn resolve_settings(config: &FileConfig) -> Result<Vec<ProviderSettings>, RegistryError> {
    let mut resolved = Vec::with_capacity(config.enabled_providers.len());

    for (raw_name, &enabled) in &config.enabled_providers {
        let name = ProviderName::new(raw_name.as_str())
            .map_err(|_| RegistryError::InvalidName(raw_name.clone()))?;
        let entry = config.providers.get(raw_name);

        let kind = match entry.and_then(|e| e.kind.as_deref()) {
            Some(kind) => kind
                .parse::<ProviderKind>()
                .map_err(|message| RegistryError::UnknownKind {
                    name: raw_name.clone(),
                    message,
                })?,
            None => match ProviderKind::builtin(raw_name) {
                Some(kind) => kind,
                None if enabled => return Err(RegistryError::UnknownProvider(raw_name.clone())),
                None => {
                    debug!(provider = %raw_name, "Skipping disabled provider with no kind");
                    continue;
                }
            },
        };

        let settings = ProviderSettings::new(name, kind, enabled);
        resolved.push(match entry {
            Some(entry) => settings.with_overrides(entry),
            None => settings,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileProviderConfig;
    use crate::credentials::ApiKey;

    fn config(entries: &[(&str, bool)]) -> FileConfig {
        FileConfig {
            enabled_providers: entries
                .iter()
                .map(|(name, enabled)| (name.to_string(), *enabled))
                .collect(),
            ..Default::default()
        }
    }

    fn credentials(names: &[&str]) -> Credentials {
        names
            .iter()
            .map(|n| (ProviderName::new(*n).unwrap(), ApiKey::new("key")))
            .collect()
    }

    fn names(providers: &[Arc<dyn Provider>]) -> Vec<String> {
        providers.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_required_credentials_cover_enabled_api_providers() {
        let config = config(&[("openai", true), ("anthropic", false), ("echo", true)]);
        let required = ProviderRegistry::required_credentials(&config).unwrap();
        assert_eq!(
            required,
            vec![CredentialRequirement {
                provider: ProviderName::new("openai").unwrap(),
                env_var: "OPENAI_API_KEY".to_string(),
            }]
        );
    }

    #[test]
    fn test_custom_kind_and_key_variable() {
        let mut config = config(&[("local", true)]);
        config.providers.insert(
            "local".to_string(),
            FileProviderConfig {
                kind: Some("openai".to_string()),
                api_key_env: Some("LOCAL_TOKEN".to_string()),
                ..Default::default()
            },
        );

        let required = ProviderRegistry::required_credentials(&config).unwrap();
        assert_eq!(required[0].env_var, "LOCAL_TOKEN");

        let registry = ProviderRegistry::build(&config, &credentials(&["local"])).unwrap();
        assert_eq!(names(&registry.enabled()), vec!["local"]);
    }

    #[test]
    fn test_build_orders_by_name_and_filters_enabled() {
        let config = config(&[("openai", true), ("echo", true), ("anthropic", false)]);
        let registry = ProviderRegistry::build(&config, &credentials(&["openai"])).unwrap();

        assert_eq!(names(&registry.all()), vec!["anthropic", "echo", "openai"]);
        assert_eq!(names(&registry.enabled()), vec!["echo", "openai"]);
        assert!(!registry.get("anthropic").unwrap().is_enabled());
        assert!(registry.get("gemini").is_none());
    }

    #[test]
    fn test_missing_credential_is_fatal() {
        let config = config(&[("openai", true)]);
        let err = ProviderRegistry::build(&config, &Credentials::new()).err().unwrap();
        assert_eq!(
            err,
            RegistryError::MissingCredential {
                provider: "openai".to_string(),
                env_var: "OPENAI_API_KEY".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_enabled_provider_is_rejected() {
        let config = config(&[("gemini", true)]);
        let err = ProviderRegistry::required_credentials(&config).unwrap_err();
        assert_eq!(err, RegistryError::UnknownProvider("gemini".to_string()));
    }

    #[test]
    fn test_unknown_disabled_provider_is_skipped() {
        let config = config(&[("gemini", false), ("echo", true)]);
        let registry = ProviderRegistry::build(&config, &Credentials::new()).unwrap();
        assert_eq!(names(&registry.all()), vec!["echo"]);
    }

    #[test]
    fn test_bad_kind_is_rejected() {
        let mut config = config(&[("local", true)]);
        config.providers.insert(
            "local".to_string(),
            FileProviderConfig {
                kind: Some("cohere".to_string()),
                ..Default::default()
            },
        );
        let err = ProviderRegistry::required_credentials(&config).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKind { .. }));
    }
}
