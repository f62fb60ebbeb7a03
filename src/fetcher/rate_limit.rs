use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

/// Default admission rate for item fetches, in calls per second.
pub const DEFAULT_CALLS_PER_SEC: f64 = 10.0;

/// Minimum-interval gate shared by every fetch worker.
///
/// The lock is held while a caller waits out the remainder of the
/// interval, so concurrent callers pass the gate strictly one at a time
/// and the aggregate admission rate never exceeds the configured ceiling.
/// Order of admission among simultaneously blocked callers is whatever
/// the mutex hands out.
pub struct RateLimiter {
    interval: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(calls_per_sec: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / calls_per_sec),
            last_admitted: Mutex::new(None),
        }
    }

    /// Block until at least `1/rate` seconds have elapsed since the
    /// previous admission, then admit exactly one call.
    pub async fn acquire(&self) {
        let mut last = self.last_admitted.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn first_admission_is_immediate() {
        let limiter = RateLimiter::new(1.0);

        let start = Instant::now();
        limiter.acquire().await;

        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn sequential_admissions_respect_the_interval() {
        // 20 calls/sec = 50ms between admissions.
        let limiter = RateLimiter::new(20.0);

        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }

        // Two gaps between three admissions.
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn concurrent_admissions_are_serialized() {
        let limiter = Arc::new(RateLimiter::new(50.0));

        let start = Instant::now();
        let mut tasks = Vec::new();
        for _ in 0..6 {
            let limiter = limiter.clone();
            tasks.push(tokio::spawn(async move {
                limiter.acquire().await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // Six admissions at 20ms apart take at least 100ms regardless of
        // how many tasks contend for the gate.
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
