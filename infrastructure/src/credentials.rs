//! API key loading
//!
//! Keys come from the process environment, optionally seeded from a `.env`
//! file. Each provider's key lives in `<NAME>_API_KEY` unless the config
//! names another variable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use verdict_domain::ProviderName;

/// Secret API key; never printed in full
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Provider name -> key, for the providers that need one
pub type Credentials = HashMap<ProviderName, ApiKey>;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to load env file {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },

    #[error("Missing API key for provider {provider}: set {env_var}")]
    Missing { provider: String, env_var: String },
}

/// A key some provider needs before the run can start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRequirement {
    pub provider: ProviderName,
    pub env_var: String,
}

pub struct CredentialLoader;

impl CredentialLoader {
    /// Load `path` into the process environment.
    ///
    /// Variables already set are left alone. A missing file is not an error
    /// (keys may already be exported) and yields `Ok(false)`.
    pub fn load_env_file(path: &Path) -> Result<bool, CredentialError> {
        match dotenv::from_path(path) {
            Ok(()) => {
                info!(path = %path.display(), "Loaded env file");
                Ok(true)
            }
            Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Env file not found, using process environment");
                Ok(false)
            }
            Err(e) => Err(CredentialError::EnvFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Read the key for every requirement; the first missing or empty key is fatal
    pub fn resolve(requirements: &[CredentialRequirement]) -> Result<Credentials, CredentialError> {
        let mut credentials = Credentials::with_capacity(requirements.len());
        for requirement in requirements {
            let key = Self::read(&requirement.env_var).ok_or_else(|| CredentialError::Missing {
                provider: requirement.provider.to_string(),
                env_var: requirement.env_var.clone(),
            })?;
            debug!(provider = %requirement.provider, env_var = %requirement.env_var, "API key found");
            credentials.insert(requirement.provider.clone(), key);
        }
        Ok(credentials)
    }

    fn read(env_var: &str) -> Option<ApiKey> {
        std::env::var(env_var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(ApiKey::new)
    }
}
