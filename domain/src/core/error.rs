//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt is required")]
    EmptyPrompt,

    #[error("Invalid provider name: {0:?}")]
    InvalidProviderName(String),

    #[error("Provider {0} already recorded an outcome")]
    DuplicateOutcome(String),

    #[error("Invalid run state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl DomainError {
    /// Check if this error was caused by bad user input rather than internal misuse
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyPrompt | DomainError::InvalidProviderName(_)
        )
    }
}
