//! Configuration file loader with multi-source merging

use super::file_config::{ConfigIssue, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Prefix of environment variables that override config values
pub const ENV_PREFIX: &str = "VERDICT_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid config: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("Invalid config: {}", join_messages(.0))]
    Validation(Vec<ConfigIssue>),
}

fn join_messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration loader that handles source merging and validation
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `path`
    ///
    /// Priority (highest to lowest):
    /// 1. `VERDICT_*` environment variables (`__` separates nested keys,
    ///    e.g. `VERDICT_ENABLED_PROVIDERS__OPENAI=false`)
    /// 2. The config file (TOML if it ends in `.toml`, JSON otherwise)
    /// 3. Default values
    ///
    /// The file itself is required. The capitalized `EnabledProviders` and
    /// `Debug` keys are accepted alongside the snake_case ones.
    pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "Loading config");

        let config: FileConfig = Self::figment(path).extract().map_err(Box::new)?;

        let issues = config.validate();
        for issue in issues.iter().filter(|i| !i.is_error()) {
            warn!("{}", issue.message);
        }
        let errors: Vec<_> = issues.into_iter().filter(ConfigIssue::is_error).collect();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        // Missing keys fall back to `FileConfig::default()` via `#[serde(default)]`.
        let figment = if Self::is_toml(path) {
            Figment::from(Toml::file(path))
        } else {
            Figment::from(Json::file(path))
        };

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn is_toml(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_config(
            ".json",
            r#"{"enabled_providers": {"openai": true, "echo": false}, "debug": true}"#,
        );

        temp_env::with_var_unset("VERDICT_TIMEOUT_SECONDS", || {
            let config = ConfigLoader::load(file.path()).unwrap();
            assert_eq!(config.enabled_names().collect::<Vec<_>>(), vec!["openai"]);
            assert!(config.debug);
            assert_eq!(config.timeout_seconds, 60);
        });
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            r#"
timeout_seconds = 15

[enabled_providers]
anthropic = true
"#,
        );

        temp_env::with_var_unset("VERDICT_TIMEOUT_SECONDS", || {
            let config = ConfigLoader::load(file.path()).unwrap();
            assert_eq!(config.timeout_seconds, 15);
            assert_eq!(config.enabled_names().collect::<Vec<_>>(), vec!["anthropic"]);
        });
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let file = write_config(".json", r#"{"enabled_providers": {"openai": "#);
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_wrong_type_is_fatal() {
        let file = write_config(".json", r#"{"enabled_providers": {"openai": "yes"}}"#);
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validation_errors_are_fatal() {
        let file = write_config(".json", r#"{"timeout_seconds": 0}"#);
        temp_env::with_var_unset("VERDICT_TIMEOUT_SECONDS", || {
            let err = ConfigLoader::load(file.path()).unwrap_err();
            assert_eq!(err.to_string(), "Invalid config: timeout_seconds cannot be 0");
        });
    }

    #[test]
    fn test_load_capitalized_keys() {
        let file = write_config(
            ".json",
            r#"{"EnabledProviders": {"openai": true, "anthropic": false}, "Debug": true}"#,
        );

        temp_env::with_var_unset("VERDICT_TIMEOUT_SECONDS", || {
            let config = ConfigLoader::load(file.path()).unwrap();
            assert_eq!(config.enabled_names().collect::<Vec<_>>(), vec!["openai"]);
            assert!(config.debug);
            assert_eq!(config.timeout_seconds, 60);
        });
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(".json", r#"{"timeout_seconds": 30}"#);
        temp_env::with_var("VERDICT_TIMEOUT_SECONDS", Some("5"), || {
            let config = ConfigLoader::load(file.path()).unwrap();
            assert_eq!(config.timeout_seconds, 5);
        });
    }
}
