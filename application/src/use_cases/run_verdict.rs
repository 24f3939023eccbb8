//! Run Verdict use case
//!
//! Orchestrates one run: resolve the enabled providers, fan the prompt out,
//! pick the summarizer, summarize, and hand back a report.

use crate::config::RunParams;
use crate::deadline::Deadline;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::provider::Provider;
use crate::use_cases::fan_out::{FanOutEngine, FanOutError};
use crate::use_cases::summarize::{SummarizeError, SummarizeStep, select_summarizer};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};
use verdict_domain::{DomainError, Prompt, RunState, VerdictReport};

/// Errors that end a run
#[derive(Error, Debug)]
pub enum RunVerdictError {
    #[error("{0}")]
    InvalidPrompt(DomainError),

    #[error("No enabled providers")]
    NoEnabledProviders,

    #[error("Summarizer provider not found or not enabled: {0}")]
    SummarizerNotFound(String),

    #[error("No providers returned an answer")]
    AllProvidersFailed,

    #[error("Fan-out error: {0}")]
    FanOut(#[from] FanOutError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error("Internal state error: {0}")]
    State(DomainError),
}

impl RunVerdictError {
    /// The state the run was in when it failed
    pub fn failed_at(&self) -> RunState {
        match self {
            RunVerdictError::InvalidPrompt(_) => RunState::Init,
            RunVerdictError::NoEnabledProviders => RunState::ConfigLoaded,
            // Resolved eagerly, before any query is dispatched.
            RunVerdictError::SummarizerNotFound(_) => RunState::ProvidersResolved,
            RunVerdictError::FanOut(_) | RunVerdictError::AllProvidersFailed => {
                RunState::ProvidersResolved
            }
            RunVerdictError::Summarize(_) => RunState::SummarizerSelected,
            RunVerdictError::State(_) => RunState::Failed,
        }
    }
}

/// Input for the RunVerdict use case
#[derive(Debug, Clone)]
pub struct RunVerdictInput {
    /// The prompt sent to every enabled provider
    pub prompt: String,
    /// Summarizer name and run deadline
    pub params: RunParams,
}

impl RunVerdictInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            params: RunParams::default(),
        }
    }

    pub fn with_params(mut self, params: RunParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_summarizer(mut self, name: impl Into<String>) -> Self {
        self.params.summarizer = name.into();
        self
    }
}

/// Use case for producing one verdict
///
/// Constructed from the provider set built out of an already-loaded
/// configuration; `Init -> ConfigLoaded` therefore only validates the prompt.
pub struct RunVerdictUseCase {
    providers: Vec<Arc<dyn Provider>>,
}

impl RunVerdictUseCase {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Execute with default (no-op) progress and a fresh deadline
    pub async fn execute(&self, input: RunVerdictInput) -> Result<VerdictReport, RunVerdictError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks and a fresh deadline
    pub async fn execute_with_progress(
        &self,
        input: RunVerdictInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<VerdictReport, RunVerdictError> {
        let deadline = Deadline::after(input.params.timeout);
        self.execute_within(input, &deadline, progress).await
    }

    /// Execute under a caller-owned deadline
    pub async fn execute_within(
        &self,
        input: RunVerdictInput,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Result<VerdictReport, RunVerdictError> {
        let (_, result) = self.run_to_end(input, deadline, progress).await;
        result
    }

    /// Run and report the state the run ended in (`Done` or `Failed`)
    async fn run_to_end(
        &self,
        input: RunVerdictInput,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> (RunState, Result<VerdictReport, RunVerdictError>) {
        let mut state = RunState::Init;
        let result = self.run(input, deadline, progress, &mut state).await;
        if let Err(e) = &result {
            error!(state = %state, "Run failed: {}", e);
            if let Err(transition_error) = transition(&mut state, RunState::Failed) {
                warn!("{}", transition_error);
            }
        }
        (state, result)
    }

    async fn run(
        &self,
        input: RunVerdictInput,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
        state: &mut RunState,
    ) -> Result<VerdictReport, RunVerdictError> {
        let started = Instant::now();

        let prompt = Prompt::new(input.prompt).map_err(RunVerdictError::InvalidPrompt)?;
        transition(state, RunState::ConfigLoaded)?;

        let enabled: Vec<Arc<dyn Provider>> = self
            .providers
            .iter()
            .filter(|p| p.is_enabled())
            .cloned()
            .collect();
        if enabled.is_empty() {
            return Err(RunVerdictError::NoEnabledProviders);
        }
        transition(state, RunState::ProvidersResolved)?;

        let summarizer = select_summarizer(&enabled, &input.params.summarizer)
            .ok_or_else(|| RunVerdictError::SummarizerNotFound(input.params.summarizer.clone()))?;

        // The fan-out ends early enough to leave `reserve` for the summarizer.
        let reserve = input.params.summarizer_reserve.min(deadline.remaining() / 2);
        let fan_out_deadline = deadline.reserving(reserve);
        debug!(reserve_ms = reserve.as_millis() as u64, "Fan-out deadline set");

        let fan_out = FanOutEngine::run(&enabled, &prompt, &fan_out_deadline, progress).await?;
        if !fan_out.has_answers() {
            for (name, reason) in fan_out.sorted_errors() {
                warn!(provider = %name, error = %reason, "No answer");
            }
            return Err(RunVerdictError::AllProvidersFailed);
        }
        transition(state, RunState::FannedOut)?;

        info!(provider = %summarizer.name(), "Summarizer selected");
        transition(state, RunState::SummarizerSelected)?;

        let verdict = SummarizeStep::run(summarizer.as_ref(), &fan_out, deadline, progress).await?;
        transition(state, RunState::Summarized)?;

        let report = VerdictReport {
            prompt: prompt.into_content(),
            answered: fan_out.sorted_results(),
            failed: fan_out.sorted_errors(),
            verdict,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        transition(state, RunState::Done)?;

        Ok(report)
    }
}

fn transition(state: &mut RunState, to: RunState) -> Result<(), RunVerdictError> {
    let from = *state;
    *state = from.advance(to).map_err(RunVerdictError::State)?;
    debug!(from = %from, to = %to, "Run state");
    Ok(())
}
