//! Configuration file loading for verdict
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VERDICT_*` environment variables
//! 2. The `--config <path>` file (default `config.json`)
//! 3. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileOutputConfig, FileProviderConfig, KNOWN_KINDS, Severity,
};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX};
