//! Run parameters.
//!
//! [`RunParams`] groups the static knobs of one run: which provider
//! synthesizes the verdict and how long the whole run may take.

use std::time::Duration;

/// Deadline covering fan-out and summarization together
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(60);

/// Longest slice of the run deadline held back from the fan-out for the summarizer
pub const DEFAULT_SUMMARIZER_RESERVE: Duration = Duration::from_secs(15);

/// Provider asked for the verdict when none is requested
pub const DEFAULT_SUMMARIZER: &str = "openai";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    /// Name of the enabled provider that synthesizes the verdict
    pub summarizer: String,
    /// Shared deadline for the whole run
    pub timeout: Duration,
    /// Time the fan-out leaves for the summarizer, capped at half the deadline
    pub summarizer_reserve: Duration,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            summarizer: DEFAULT_SUMMARIZER.to_string(),
            timeout: DEFAULT_RUN_TIMEOUT,
            summarizer_reserve: DEFAULT_SUMMARIZER_RESERVE,
        }
    }
}

impl RunParams {
    pub fn with_summarizer(mut self, name: impl Into<String>) -> Self {
        self.summarizer = name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_summarizer_reserve(mut self, reserve: Duration) -> Self {
        self.summarizer_reserve = reserve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RunParams::default();
        assert_eq!(params.summarizer, "openai");
        assert_eq!(params.timeout, Duration::from_secs(60));
        assert_eq!(params.summarizer_reserve, Duration::from_secs(15));
    }

    #[test]
    fn test_builder() {
        let params = RunParams::default()
            .with_summarizer("anthropic")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(params.summarizer, "anthropic");
        assert_eq!(params.timeout, Duration::from_secs(5));
    }
}
