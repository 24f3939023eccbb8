//! Run deadline
//!
//! One [`Deadline`] is created per run and handed to every provider query,
//! both in the fan-out and for the summarizer. It combines a fixed point in
//! time with a [`CancellationToken`] so the run can also be stopped early
//! (e.g. on Ctrl-C).

use crate::ports::provider::ProviderError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct Deadline {
    at: Instant,
    token: CancellationToken,
}

impl Deadline {
    /// Deadline `timeout` from now
    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    pub fn at(at: Instant) -> Self {
        Self {
            at,
            token: CancellationToken::new(),
        }
    }

    /// Attach an externally owned cancellation token
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Earlier deadline that leaves `reserve` of this one unused
    ///
    /// The returned deadline shares the cancellation token, so cancelling
    /// either cancels both.
    pub fn reserving(&self, reserve: Duration) -> Deadline {
        Deadline {
            at: self.at.checked_sub(reserve).unwrap_or(self.at),
            token: self.token.clone(),
        }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_expired(&self) -> bool {
        self.is_cancelled() || Instant::now() >= self.at
    }

    /// Cancel every query sharing this deadline
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Drive `fut` to completion unless the deadline fires or the run is cancelled first
    pub async fn enforce<F, T>(&self, fut: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ProviderError::Cancelled),
            _ = tokio::time::sleep_until(self.at) => Err(ProviderError::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_enforce_passes_through_fast_future() {
        let deadline = Deadline::after(Duration::from_secs(5));
        let result = deadline.enforce(async { Ok::<_, ProviderError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_enforce_times_out_slow_future() {
        let deadline = Deadline::after(Duration::from_millis(20));
        let result = deadline
            .enforce(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, ProviderError>(())
            })
            .await;
        assert_eq!(result, Err(ProviderError::DeadlineExceeded));
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_cancel_wins_over_pending_future() {
        let deadline = Deadline::after(Duration::from_secs(30));
        let handle = deadline.clone();
        handle.cancel();

        let result = deadline
            .enforce(std::future::pending::<Result<(), ProviderError>>())
            .await;
        assert_eq!(result, Err(ProviderError::Cancelled));
        assert!(deadline.is_cancelled());
    }

    #[tokio::test]
    async fn test_reserving_leaves_time_after_inner_deadline() {
        let outer = Deadline::after(Duration::from_millis(400));
        let inner = outer.reserving(Duration::from_millis(200));
        assert!(inner.instant() < outer.instant());

        let result = inner
            .enforce(std::future::pending::<Result<(), ProviderError>>())
            .await;
        assert_eq!(result, Err(ProviderError::DeadlineExceeded));
        assert!(!outer.is_expired());
        assert_eq!(outer.enforce(async { Ok::<_, ProviderError>(1) }).await, Ok(1));
    }

    #[tokio::test]
    async fn test_reserving_shares_cancellation() {
        let outer = Deadline::after(Duration::from_secs(30));
        let inner = outer.reserving(Duration::from_secs(10));
        inner.cancel();
        assert!(outer.is_cancelled());
    }

    #[tokio::test]
    async fn test_external_token() {
        let token = CancellationToken::new();
        let deadline = Deadline::after(Duration::from_secs(30)).with_token(token.clone());
        assert!(!deadline.is_expired());
        token.cancel();
        assert!(deadline.is_expired());
    }
}
