//! Fan-out query engine
//!
//! Queries every enabled provider concurrently under one shared deadline and
//! collects the outcomes at a join barrier.

use crate::deadline::Deadline;
use crate::ports::progress::ProgressNotifier;
use crate::ports::provider::Provider;
use crate::use_cases::shared::guarded_query;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use verdict_domain::{FanOutResult, Prompt, ProviderName, QueryOutcome, preview};

/// Caller errors; provider failures are never reported here
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FanOutError {
    #[error("No providers to query")]
    NoProviders,

    #[error("Provider {0} appears more than once")]
    DuplicateProvider(ProviderName),
}

/// Concurrent fan-out/join over a set of providers
pub struct FanOutEngine;

impl FanOutEngine {
    /// Query each provider exactly once and wait for all of them.
    ///
    /// Returns once every dispatched query has reported one outcome, which
    /// happens no later than `deadline`. The outcome maps are written by this
    /// coordinating task only, so provider completions never interleave.
    pub async fn run(
        providers: &[Arc<dyn Provider>],
        prompt: &Prompt,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Result<FanOutResult, FanOutError> {
        if providers.is_empty() {
            return Err(FanOutError::NoProviders);
        }

        let mut names = HashSet::with_capacity(providers.len());
        for provider in providers {
            if !names.insert(provider.name().clone()) {
                return Err(FanOutError::DuplicateProvider(provider.name().clone()));
            }
        }

        info!(count = providers.len(), "Querying providers");
        progress.on_fan_out_start(providers.len());

        let mut join_set = JoinSet::new();

        for provider in providers {
            let provider = Arc::clone(provider);
            let prompt = prompt.content().to_string();
            let deadline = deadline.clone();

            join_set.spawn(async move {
                let result = guarded_query(provider.as_ref(), &prompt, &deadline).await;
                (provider.name().clone(), result)
            });
        }

        let mut fan_out = FanOutResult::new();

        while let Some(joined) = join_set.join_next().await {
            let (name, outcome) = match joined {
                Ok((name, Ok(answer))) => {
                    info!(provider = %name, "Provider answered");
                    debug!(provider = %name, answer = %preview(&answer, 120), "Answer preview");
                    (name, QueryOutcome::Answered(answer))
                }
                Ok((name, Err(e))) => {
                    warn!(provider = %name, error = %e, "Provider failed");
                    (name, QueryOutcome::Failed(e.to_string()))
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    continue;
                }
            };

            let success = outcome.is_answered();
            if let Err(e) = fan_out.record(name.clone(), outcome) {
                warn!(provider = %name, "Dropping outcome: {}", e);
                continue;
            }
            progress.on_provider_complete(&name, success);
        }

        // A task that never reported (aborted runtime task) still counts as one failure.
        for provider in providers {
            let name = provider.name();
            if !fan_out.contains(name) {
                warn!(provider = %name, "Provider task ended without an outcome");
                if fan_out
                    .record(name.clone(), QueryOutcome::failed("query task aborted"))
                    .is_ok()
                {
                    progress.on_provider_complete(name, false);
                }
            }
        }

        info!(
            answered = fan_out.results().len(),
            failed = fan_out.errors().len(),
            "Fan-out complete"
        );
        progress.on_fan_out_complete(fan_out.results().len(), fan_out.errors().len());

        Ok(fan_out)
    }
}
