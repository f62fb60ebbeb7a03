use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::app::{HndError, Result};
use crate::domain::{Mode, RowContent, StoryId, StoryRow};
use crate::fetcher::rate_limit::RateLimiter;
use crate::fetcher::Fetcher;

pub const DEFAULT_WORKERS: usize = 10;

/// Fan-out/fan-in orchestrator for one window of ranked stories.
pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    limiter: Arc<RateLimiter>,
    workers: usize,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, limiter: Arc<RateLimiter>) -> Self {
        Self::with_workers(fetcher, limiter, DEFAULT_WORKERS)
    }

    pub fn with_workers(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        limiter: Arc<RateLimiter>,
        workers: usize,
    ) -> Self {
        Self {
            fetcher,
            limiter,
            workers,
        }
    }

    /// Fetch the stories ranked `start..=start+num-1` from the `mode`
    /// listing. `start` and `num` are 1-based and must both be at least 1.
    ///
    /// Returns one row per id in the window, in rank order. A failed item
    /// fetch degrades its own row to the placeholder; only the bounds
    /// check and the listing request can fail the whole call.
    /// `on_progress(done, total)` fires once per completed item.
    pub async fn fetch_window(
        &self,
        mode: Mode,
        start: usize,
        num: usize,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Vec<StoryRow>> {
        let limit = mode.max_listing();
        let end = start.saturating_add(num) - 1;
        if end > limit {
            return Err(HndError::WindowOutOfRange {
                mode,
                start,
                end,
                limit,
            });
        }

        // The listing request itself is not rate-limited; the gate only
        // covers item fetches.
        let listing = self.fetcher.listing(mode).await?;
        let window: Vec<StoryId> = listing.into_iter().skip(start - 1).take(num).collect();

        let total = window.len();
        tracing::debug!(%mode, start, num, total, "resolved id window");

        // Every id gets a slot up front, keyed by its window position; a
        // slot that never sees a successful fetch keeps the placeholder.
        let mut rows: Vec<StoryRow> = window
            .iter()
            .enumerate()
            .map(|(i, &id)| StoryRow {
                rank: start + i,
                id,
                content: RowContent::Failed,
            })
            .collect();

        // Pool is never smaller than the window, so no story is starved
        // waiting for a slot; `workers` is the floor.
        let semaphore = Arc::new(Semaphore::new(self.workers.max(num)));

        let mut tasks = FuturesUnordered::new();
        for (index, &id) in window.iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let limiter = self.limiter.clone();
            let semaphore = semaphore.clone();

            tasks.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                limiter.acquire().await;
                (index, fetcher.story(id).await)
            }));
        }

        let mut done = 0;
        while let Some(joined) = tasks.next().await {
            done += 1;
            match joined {
                Ok((index, Ok(story))) => {
                    rows[index].content = RowContent::Story(story);
                }
                Ok((index, Err(e))) => {
                    tracing::debug!(id = rows[index].id, error = %e, "story fetch failed");
                }
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                }
            }
            on_progress(done, total);
        }

        Ok(rows)
    }
}
