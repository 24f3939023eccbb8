//! Shared utilities for use cases.
//!
//! Contains the guarded single-query helper used by both the fan-out and
//! the summarization step.

use crate::deadline::Deadline;
use crate::ports::provider::{Provider, ProviderError};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Query one provider once under the run deadline.
///
/// The deadline is enforced from outside the provider, and a panic inside the
/// provider is turned into [`ProviderError::Panicked`], so every call ends
/// with exactly one outcome.
pub(crate) async fn guarded_query(
    provider: &dyn Provider,
    prompt: &str,
    deadline: &Deadline,
) -> Result<String, ProviderError> {
    let call = AssertUnwindSafe(provider.query(prompt, deadline)).catch_unwind();
    deadline
        .enforce(async move {
            match call.await {
                Ok(result) => result,
                Err(payload) => Err(ProviderError::Panicked(panic_message(payload.as_ref()))),
            }
        })
        .await
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockProvider;
    use std::time::Duration;

    #[tokio::test]
    async fn test_guarded_query_answer() {
        let provider = MockProvider::answering("a", "ans-A");
        let deadline = Deadline::after(Duration::from_secs(5));
        let result = guarded_query(&provider, "q", &deadline).await;
        assert_eq!(result, Ok("ans-A".to_string()));
        assert_eq!(provider.calls(), vec!["q".to_string()]);
    }

    #[tokio::test]
    async fn test_guarded_query_panic_becomes_error() {
        let provider = MockProvider::panicking("boom");
        let deadline = Deadline::after(Duration::from_secs(5));
        let result = guarded_query(&provider, "q", &deadline).await;
        assert_eq!(
            result,
            Err(ProviderError::Panicked("provider boom exploded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_guarded_query_slow_provider() {
        let provider = MockProvider::slow("slow", Duration::from_secs(30), "late");
        let deadline = Deadline::after(Duration::from_millis(20));
        let result = guarded_query(&provider, "q", &deadline).await;
        assert_eq!(result, Err(ProviderError::DeadlineExceeded));
    }
}
