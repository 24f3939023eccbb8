//! Verdict and run report value objects

use crate::core::provider_name::ProviderName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The summarizer's final answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Provider that produced the verdict
    pub summarizer: ProviderName,
    /// The synthesized text shown to the user
    pub content: String,
}

impl Verdict {
    pub fn new(summarizer: ProviderName, content: impl Into<String>) -> Self {
        Self {
            summarizer,
            content: content.into(),
        }
    }
}

/// Everything a finished run produced, for rendering
///
/// Outcome maps are sorted by provider name so that rendered output is stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictReport {
    /// The original prompt
    pub prompt: String,
    /// Answers from the fan-out
    pub answered: BTreeMap<ProviderName, String>,
    /// Failure reasons from the fan-out
    pub failed: BTreeMap<ProviderName, String>,
    /// Final verdict
    pub verdict: Verdict,
    /// Wall time of the whole run
    pub elapsed_ms: u64,
}

impl VerdictReport {
    /// Providers that were queried during the fan-out, sorted
    pub fn queried(&self) -> Vec<&ProviderName> {
        let mut names: Vec<_> = self.answered.keys().chain(self.failed.keys()).collect();
        names.sort();
        names
    }
}
