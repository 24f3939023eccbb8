//! Summarizer selection and the summarization step
//!
//! The summarizer is picked by name among the enabled providers, whatever
//! its own fan-out outcome was, and queried a second time with a prompt
//! built from the successful answers.

use crate::deadline::Deadline;
use crate::ports::progress::ProgressNotifier;
use crate::ports::provider::{Provider, ProviderError};
use crate::use_cases::shared::guarded_query;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use verdict_domain::{FanOutResult, PromptTemplate, ProviderName, Verdict};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("No successful answers to summarize")]
    NothingToSummarize,

    #[error("Summarizer {provider} failed: {source}")]
    Failed {
        provider: ProviderName,
        #[source]
        source: ProviderError,
    },
}

/// Find the enabled provider called `name`.
///
/// Disabled, misspelled and unconfigured names all yield `None`.
pub fn select_summarizer(
    providers: &[Arc<dyn Provider>],
    name: &str,
) -> Option<Arc<dyn Provider>> {
    providers
        .iter()
        .find(|p| p.name().as_str() == name && p.is_enabled())
        .cloned()
}

/// Second, dependent query that turns the answers into a verdict
pub struct SummarizeStep;

impl SummarizeStep {
    pub async fn run(
        summarizer: &dyn Provider,
        fan_out: &FanOutResult,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Result<Verdict, SummarizeError> {
        if !fan_out.has_answers() {
            return Err(SummarizeError::NothingToSummarize);
        }

        let name = summarizer.name().clone();
        let prompt = PromptTemplate::summary_prompt(fan_out);

        info!(
            provider = %name,
            answers = fan_out.results().len(),
            "Passing answers to summarizer"
        );
        debug!(provider = %name, prompt_len = prompt.len(), "Summary prompt built");
        progress.on_summarize_start(&name);

        match guarded_query(summarizer, &prompt, deadline).await {
            Ok(content) => {
                progress.on_summarize_complete(&name, true);
                Ok(Verdict::new(name, content))
            }
            Err(source) => {
                warn!(provider = %name, error = %source, "Summarizer failed");
                progress.on_summarize_complete(&name, false);
                Err(SummarizeError::Failed {
                    provider: name,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::test_support::MockProvider;
    use std::time::Duration;
    use verdict_domain::QueryOutcome;

    fn name(s: &str) -> ProviderName {
        ProviderName::new(s).unwrap()
    }

    fn fan_out() -> FanOutResult {
        let mut fan_out = FanOutResult::new();
        fan_out
            .record(name("a"), QueryOutcome::answered("ans-A"))
            .unwrap();
        fan_out
            .record(name("b"), QueryOutcome::failed("timeout"))
            .unwrap();
        fan_out
            .record(name("c"), QueryOutcome::answered("ans-C"))
            .unwrap();
        fan_out
    }

    #[test]
    fn test_select_summarizer() {
        let providers: Vec<Arc<dyn Provider>> = vec![
            MockProvider::answering("openai", "x").into_arc(),
            MockProvider::answering("anthropic", "y").disabled().into_arc(),
        ];

        let found = select_summarizer(&providers, "openai").unwrap();
        assert_eq!(found.name().as_str(), "openai");

        assert!(select_summarizer(&providers, "anthropic").is_none());
        assert!(select_summarizer(&providers, "opnai").is_none());
        assert!(select_summarizer(&providers, "gemini").is_none());
    }

    #[tokio::test]
    async fn test_summary_prompt_mentions_only_successes() {
        let summarizer = MockProvider::new("a", |prompt| Ok(format!("verdict over {} bytes", prompt.len())));
        let deadline = Deadline::after(Duration::from_secs(5));

        let verdict = SummarizeStep::run(&summarizer, &fan_out(), &deadline, &NoProgress)
            .await
            .unwrap();

        let calls = summarizer.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("ans-A"));
        assert!(calls[0].contains("ans-C"));
        assert!(!calls[0].contains("[b]"));
        assert!(!calls[0].contains("timeout"));
        assert_eq!(verdict.summarizer, name("a"));
        assert_eq!(verdict.content, format!("verdict over {} bytes", calls[0].len()));
    }

    #[tokio::test]
    async fn test_summarizer_failure_is_reported() {
        let summarizer = MockProvider::failing("a", ProviderError::Status {
            status: 500,
            body: "oops".to_string(),
        });
        let deadline = Deadline::after(Duration::from_secs(5));

        let err = SummarizeStep::run(&summarizer, &fan_out(), &deadline, &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Summarizer a failed: HTTP 500: oops");
    }

    #[tokio::test]
    async fn test_nothing_to_summarize() {
        let summarizer = MockProvider::answering("a", "never");
        let deadline = Deadline::after(Duration::from_secs(5));

        let err = SummarizeStep::run(&summarizer, &FanOutResult::new(), &deadline, &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(err, SummarizeError::NothingToSummarize);
        assert!(summarizer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_expired_deadline_fails_summarizer() {
        let summarizer = MockProvider::slow("a", Duration::from_secs(30), "late");
        let deadline = Deadline::after(Duration::from_millis(20));

        let err = SummarizeStep::run(&summarizer, &fan_out(), &deadline, &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SummarizeError::Failed {
                source: ProviderError::DeadlineExceeded,
                ..
            }
        ));
    }
}
