use std::sync::Arc;

use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::parallel::{ParallelFetcher, DEFAULT_WORKERS};
use crate::fetcher::rate_limit::{RateLimiter, DEFAULT_CALLS_PER_SEC};
use crate::fetcher::Fetcher;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub parallel_fetcher: ParallelFetcher,
}

impl AppContext {
    pub fn new() -> Self {
        Self::with_workers(DEFAULT_WORKERS)
    }

    pub fn with_workers(workers: usize) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let limiter = Arc::new(RateLimiter::new(DEFAULT_CALLS_PER_SEC));
        let parallel_fetcher = ParallelFetcher::with_workers(fetcher.clone(), limiter, workers);

        Self {
            fetcher,
            parallel_fetcher,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
