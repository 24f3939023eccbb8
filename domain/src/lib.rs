//! Domain layer for verdict
//!
//! This crate contains the value objects and pure rules of a verdict run.
//! It has no dependencies on async runtimes, I/O or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Provider name**: the key under which a provider's outcome is recorded
//!   and the name the user passes to pick the summarizer
//! - **Fan-out result**: the disjoint `results` / `errors` maps collected at
//!   the join barrier
//! - **Summary prompt**: the second, synthesized prompt built from the
//!   successful answers only
//! - **Run state**: the sequential lifecycle of one invocation

pub mod config;
pub mod core;
pub mod fanout;
pub mod prompt;
pub mod run;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError, prompt::Prompt, provider_name::ProviderName, string::preview,
};
pub use fanout::{FanOutResult, QueryOutcome};
pub use prompt::PromptTemplate;
pub use run::{RunState, Verdict, VerdictReport};
