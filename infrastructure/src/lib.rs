//! Infrastructure layer for verdict
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, credential
//! resolution and the vendor provider adapters.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig};
pub use credentials::{ApiKey, CredentialError, CredentialLoader, CredentialRequirement, Credentials};
pub use providers::registry::{ProviderRegistry, RegistryError};
pub use providers::{ProviderKind, ProviderSettings, ProviderSpec};
