//! Offline provider that echoes the prompt back
//!
//! Needs no credential or network, which makes it handy for dry runs of a
//! config and for smoke tests.

use super::ProviderSpec;
use async_trait::async_trait;
use verdict_application::{Deadline, Provider, ProviderError};
use verdict_domain::ProviderName;

pub struct EchoProvider {
    name: ProviderName,
    enabled: bool,
}

impl EchoProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        Self {
            name: spec.settings.name,
            enabled: spec.settings.enabled,
        }
    }
}

#[async_trait]
impl Provider for EchoProvider {
    fn name(&self) -> &ProviderName {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn query(&self, prompt: &str, deadline: &Deadline) -> Result<String, ProviderError> {
        if deadline.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }
        if deadline.is_expired() {
            return Err(ProviderError::DeadlineExceeded);
        }
        Ok(format!("{} answer to: {}", self.name, prompt))
    }
}
