//! Scripted providers for use case tests

use crate::deadline::Deadline;
use crate::ports::provider::{Provider, ProviderError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use verdict_domain::ProviderName;

type Responder = Arc<dyn Fn(&str) -> Result<String, ProviderError> + Send + Sync>;

pub(crate) struct MockProvider {
    name: ProviderName,
    enabled: bool,
    delay: Option<Duration>,
    panics: bool,
    respond: Responder,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub(crate) fn new(
        name: &str,
        respond: impl Fn(&str) -> Result<String, ProviderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: ProviderName::new(name).unwrap(),
            enabled: true,
            delay: None,
            panics: false,
            respond: Arc::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers `answer`, whatever the prompt
    pub(crate) fn answering(name: &str, answer: &str) -> Self {
        let answer = answer.to_string();
        Self::new(name, move |_| Ok(answer.clone()))
    }

    pub(crate) fn failing(name: &str, error: ProviderError) -> Self {
        Self::new(name, move |_| Err(error.clone()))
    }

    /// Sleeps for `delay` without looking at the deadline, then answers
    pub(crate) fn slow(name: &str, delay: Duration, answer: &str) -> Self {
        let mut provider = Self::answering(name, answer);
        provider.delay = Some(delay);
        provider
    }

    pub(crate) fn panicking(name: &str) -> Self {
        let mut provider = Self::answering(name, "");
        provider.panics = true;
        provider
    }

    pub(crate) fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub(crate) fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Prompts this provider received, in call order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &ProviderName {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn query(&self, prompt: &str, _deadline: &Deadline) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panics {
            panic!("provider {} exploded", self.name);
        }
        (self.respond)(prompt)
    }
}
