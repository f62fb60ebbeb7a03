pub mod http_fetcher;
pub mod parallel;
pub mod rate_limit;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Mode, Story, StoryId};

/// Access to the story API: ranked id listings and per-item lookups.
#[async_trait]
pub trait Fetcher {
    /// Fetch the full ranked id listing for `mode`.
    async fn listing(&self, mode: Mode) -> Result<Vec<StoryId>>;

    /// Fetch a single story by id. A failure here is terminal for the
    /// item; there are no retries.
    async fn story(&self, id: StoryId) -> Result<Story>;
}
