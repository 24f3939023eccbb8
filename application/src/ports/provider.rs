//! Provider port
//!
//! Defines the single capability every answer-provider satisfies. Vendor
//! integrations (adapters) live in the infrastructure layer; adding a vendor
//! means adding an implementation of [`Provider`], nothing else changes.

use crate::deadline::Deadline;
use async_trait::async_trait;
use thiserror::Error;
use verdict_domain::ProviderName;

/// Errors a single provider query can end with
///
/// These never escape the fan-out as errors; they become entries in the
/// `errors` map of the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    #[error("Cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned an empty answer")]
    EmptyAnswer,

    #[error("Provider panicked: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Whether the query ran out of time or was cancelled
    pub fn is_deadline(&self) -> bool {
        matches!(self, ProviderError::DeadlineExceeded | ProviderError::Cancelled)
    }
}

/// A named, independently enabled unit that can answer a prompt
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable, unique name of this provider
    fn name(&self) -> &ProviderName;

    /// Whether this provider takes part in the run
    fn is_enabled(&self) -> bool;

    /// Answer `prompt`, giving up once `deadline` fires
    ///
    /// Implementations should bound their own I/O by [`Deadline::remaining`];
    /// callers additionally enforce the deadline from outside.
    async fn query(&self, prompt: &str, deadline: &Deadline) -> Result<String, ProviderError>;
}
