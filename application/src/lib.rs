//! Application layer for verdict
//!
//! This crate contains use cases, port definitions, the run deadline and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod deadline;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    DEFAULT_RUN_TIMEOUT, DEFAULT_SUMMARIZER, DEFAULT_SUMMARIZER_RESERVE, RunParams,
};
pub use deadline::Deadline;
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    provider::{Provider, ProviderError},
};
pub use use_cases::fan_out::{FanOutEngine, FanOutError};
pub use use_cases::run_verdict::{RunVerdictError, RunVerdictInput, RunVerdictUseCase};
pub use use_cases::summarize::{SummarizeError, SummarizeStep, select_summarizer};
