//! Client-side request pacing
//!
//! Aligni allows at most 30 calls in 60 seconds. The client passes every
//! call through a [`RateLimiter`] before it goes out on the wire.

use std::time::{Duration, Instant};

/// Seconds between consecutive Aligni calls (30 calls / 60 s, plus margin)
pub const RATE_LIMIT_SECS: f64 = 2.1;

/// Gate consulted before each outgoing request
pub trait RateLimiter: Send {
    /// Block until the next request may be issued
    fn acquire(&mut self);
}

/// Spaces requests at least `interval` apart; the first request goes immediately
#[derive(Debug, Clone)]
pub struct FixedInterval {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn from_secs_f64(secs: f64) -> Self {
        Self::new(Duration::from_secs_f64(secs))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self::from_secs_f64(RATE_LIMIT_SECS)
    }
}

impl RateLimiter for FixedInterval {
    fn acquire(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                tracing::trace!(wait_ms = wait.as_millis() as u64, "pacing Aligni request");
                std::thread::sleep(wait);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// No pacing at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl RateLimiter for Unlimited {
    fn acquire(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_matches_rate_limit() {
        assert_eq!(
            FixedInterval::default().interval(),
            Duration::from_secs_f64(RATE_LIMIT_SECS)
        );
        // 30 calls must fit in 60 seconds
        assert!(RATE_LIMIT_SECS * 30.0 >= 60.0);
    }

    #[test]
    fn test_first_acquire_is_immediate() {
        let mut gate = FixedInterval::new(Duration::from_secs(5));
        let start = Instant::now();
        gate.acquire();
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_acquires_are_spaced() {
        let interval = Duration::from_millis(40);
        let mut gate = FixedInterval::new(interval);
        let start = Instant::now();
        for _ in 0..4 {
            gate.acquire();
        }
        assert!(start.elapsed() >= interval * 3);
    }

    #[test]
    fn test_unlimited_never_waits() {
        let mut gate = Unlimited;
        let start = Instant::now();
        for _ in 0..100 {
            gate.acquire();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
