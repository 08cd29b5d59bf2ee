//! Minimum-spacing rate limiter for scoring calls.
//!
//! This is the system's only backpressure mechanism: one limiter instance
//! is built in `main` and shared process-wide, so scoring load stays
//! serialized even across concurrent upload requests. Tests construct
//! their own instance with a zero interval.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum spacing between scoring calls in production.
pub const SCORING_CALL_INTERVAL: Duration = Duration::from_secs(3);

pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Sleeps until at least `min_interval` has passed since the previous
    /// call, then records the new call time. The lock is held across the
    /// sleep so concurrent callers queue up rather than racing the clock.
    pub async fn wait(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_second_call_waits_out_the_interval() {
        let limiter = RateLimiter::new(Duration::from_secs(3));
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_call_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_secs(3));
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_interval_passes_through() {
        let limiter = RateLimiter::new(Duration::from_secs(3));
        limiter.wait().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_zero_interval_never_sleeps() {
        let limiter = RateLimiter::new(Duration::ZERO);
        for _ in 0..10 {
            limiter.wait().await;
        }
    }
}
