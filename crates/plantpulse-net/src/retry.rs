//! Bounded retry with linear backoff.
//!
//! Telemetry delivery is best-effort: a call that still fails after the
//! configured retries surfaces its last error and the tick's data is
//! dropped (and counted by the runner). The backoff is linear -- attempt
//! n waits `n * backoff` -- which is plenty for a 5-second tick cadence.

use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Retry parameters shared by all outbound calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt (0 = single attempt).
    pub max_retries: u32,
    /// Base backoff step between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Create a policy from explicit parameters.
    pub const fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Backoff before retry number `attempt` (0-based): `(attempt + 1) * backoff`.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt.saturating_add(1))
    }

    /// Run `op` until it succeeds or the retry budget is spent.
    ///
    /// Every failure before the last is logged at warn level; the final
    /// failure is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns the last error once `max_retries` retries are exhausted.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt < self.max_retries => {
                    warn!(attempt, error = %error, "outbound call failed, retrying");
                    tokio::time::sleep(self.delay(attempt)).await;
                    attempt = attempt.saturating_add(1);
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn delay_grows_linearly() {
        let policy = RetryPolicy::new(3, Duration::from_millis(500));
        assert_eq!(policy.delay(0), Duration::from_millis(500));
        assert_eq!(policy.delay(1), Duration::from_millis(1000));
        assert_eq!(policy.delay(2), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_without_retrying() {
        let policy = RetryPolicy::default();
        let calls = Cell::new(0_u32);
        let result: Result<u32, String> = policy
            .run(|| {
                calls.set(calls.get().saturating_add(1));
                async { Ok(7) }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let calls = Cell::new(0_u32);
        let result: Result<&str, String> = policy
            .run(|| {
                calls.set(calls.get().saturating_add(1));
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err("not yet".to_owned())
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_budget_surfaces_the_last_error() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));
        let calls = Cell::new(0_u32);
        let result: Result<(), String> = policy
            .run(|| {
                calls.set(calls.get().saturating_add(1));
                let n = calls.get();
                async move { Err(format!("failure {n}")) }
            })
            .await;
        assert_eq!(result.unwrap_err(), "failure 3");
        // 1 initial attempt + 2 retries.
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_means_a_single_attempt() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));
        let calls = Cell::new(0_u32);
        let result: Result<(), String> = policy
            .run(|| {
                calls.set(calls.get().saturating_add(1));
                async { Err("nope".to_owned()) }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
