use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::app::Result;
use crate::domain::{Mode, Story, StoryId};
use crate::fetcher::Fetcher;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Per-request timeout; the only bound on a stuck call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_base_url(Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"))
    }

    /// Point the fetcher at a different API root. Tests use this to talk
    /// to a local mock server.
    pub fn with_base_url(base: Url) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .user_agent("hnd/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base.join(path)?;
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn listing(&self, mode: Mode) -> Result<Vec<StoryId>> {
        self.get_json(&mode.listing_path()).await
    }

    async fn story(&self, id: StoryId) -> Result<Story> {
        self.get_json(&format!("item/{id}.json")).await
    }
}
