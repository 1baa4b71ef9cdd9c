use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Minimum-interval gate in front of one aggregator's outgoing requests.
///
/// `acquire` reserves the next issuance slot and suspends the caller
/// until that slot arrives. The reservation is taken under the lock but
/// the wait happens outside it, so concurrent callers serialize their
/// *issuance* times without waiting on each other's responses. Each
/// aggregator owns exactly one instance; the slot is its only mutable
/// state.
pub struct RateLimiter {
    min_interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Gate for a ceiling of `requests_per_second` calls per second.
    pub fn per_second(requests_per_second: u32) -> Self {
        let requests = u64::from(requests_per_second.max(1));
        Self::new(Duration::from_millis(1000 / requests))
    }

    pub async fn acquire(&self) {
        let slot = {
            let mut next = self
                .next_slot
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let at = match *next {
                Some(reserved) if reserved > now => reserved,
                _ => now,
            };
            *next = Some(at + self.min_interval);
            at
        };
        tokio::time::sleep_until(slot).await;
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_derive_interval_from_requests_per_second() {
        assert_eq!(
            RateLimiter::per_second(1).min_interval(),
            Duration::from_millis(1000)
        );
        assert_eq!(
            RateLimiter::per_second(2).min_interval(),
            Duration::from_millis(500)
        );
        // A zero ceiling would divide by zero; it clamps to one.
        assert_eq!(
            RateLimiter::per_second(0).min_interval(),
            Duration::from_millis(1000)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_space_consecutive_acquisitions_by_the_interval() {
        let limiter = RateLimiter::per_second(2);
        let start = Instant::now();

        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(500));

        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_delay_the_first_acquisition() {
        let limiter = RateLimiter::per_second(1);
        let start = Instant::now();

        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_delay_after_an_idle_period() {
        let limiter = RateLimiter::per_second(1);
        limiter.acquire().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        let before = Instant::now();
        limiter.acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn should_serialize_concurrent_acquirers() {
        let limiter = Arc::new(RateLimiter::per_second(1));
        let start = Instant::now();

        tokio::join!(limiter.acquire(), limiter.acquire());
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
