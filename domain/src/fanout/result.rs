//! Aggregated fan-out result

use super::outcome::QueryOutcome;
use crate::core::error::DomainError;
use crate::core::provider_name::ProviderName;
use std::collections::{BTreeMap, HashMap};

/// The two outcome maps produced by one fan-out
///
/// A provider name appears in at most one of `results` and `errors`;
/// [`FanOutResult::record`] refuses a second outcome for the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutResult {
    results: HashMap<ProviderName, String>,
    errors: HashMap<ProviderName, String>,
}

impl FanOutResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the single outcome of one provider
    pub fn record(&mut self, name: ProviderName, outcome: QueryOutcome) -> Result<(), DomainError> {
        if self.contains(&name) {
            return Err(DomainError::DuplicateOutcome(name.to_string()));
        }
        match outcome {
            QueryOutcome::Answered(answer) => self.results.insert(name, answer),
            QueryOutcome::Failed(reason) => self.errors.insert(name, reason),
        };
        Ok(())
    }

    pub fn contains(&self, name: &ProviderName) -> bool {
        self.results.contains_key(name) || self.errors.contains_key(name)
    }

    /// Successful answers keyed by provider
    pub fn results(&self) -> &HashMap<ProviderName, String> {
        &self.results
    }

    /// Failure reasons keyed by provider
    pub fn errors(&self) -> &HashMap<ProviderName, String> {
        &self.errors
    }

    /// Number of providers that reported any outcome
    pub fn len(&self) -> usize {
        self.results.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_answers(&self) -> bool {
        !self.results.is_empty()
    }

    /// Answers sorted by provider name
    pub fn sorted_results(&self) -> BTreeMap<ProviderName, String> {
        self.results
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Failure reasons sorted by provider name
    pub fn sorted_errors(&self) -> BTreeMap<ProviderName, String> {
        self.errors
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
