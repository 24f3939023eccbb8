//! Progress notification port
//!
//! Defines the interface for reporting progress during a run.

use verdict_domain::ProviderName;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer. Callbacks are invoked
/// from the coordinating task only, never from provider tasks.
pub trait ProgressNotifier: Send + Sync {
    /// Called when the fan-out is dispatched
    fn on_fan_out_start(&self, total: usize);

    /// Called as each provider's outcome is recorded
    fn on_provider_complete(&self, provider: &ProviderName, success: bool);

    /// Called once the join barrier resolves
    fn on_fan_out_complete(&self, answered: usize, failed: usize);

    /// Called before the summarizer is queried
    fn on_summarize_start(&self, _summarizer: &ProviderName) {}

    /// Called after the summarizer returned or failed
    fn on_summarize_complete(&self, _summarizer: &ProviderName, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fan_out_start(&self, _total: usize) {}
    fn on_provider_complete(&self, _provider: &ProviderName, _success: bool) {}
    fn on_fan_out_complete(&self, _answered: usize, _failed: usize) {}
}
