//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`]: the validated prompt sent to every provider
//! - [`provider_name::ProviderName`]: stable provider identifier
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod prompt;
pub mod provider_name;
pub mod string;
