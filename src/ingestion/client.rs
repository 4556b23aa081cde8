use super::types::BookmarkPage;
use crate::store::types::Bookmark;
use anyhow::{Context, Result};
use std::time::Duration;

const PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_ATTEMPTS: usize = 3;

/// Connection settings for the remote bookmarking API.
///
/// Loaded once at startup and handed to the client explicitly.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_token: String,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    /// Reads `BOOKMARKS_URL` and `BOOKMARKS_TOKEN` from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BOOKMARKS_URL").context("BOOKMARKS_URL is not set")?;
        let api_token = std::env::var("BOOKMARKS_TOKEN").context("BOOKMARKS_TOKEN is not set")?;
        Ok(Self::new(base_url, api_token))
    }
}

/// HTTP client for the remote bookmark listing.
pub struct RemoteClient {
    config: RemoteConfig,
    http_client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetches every bookmark the API lists, following pagination until the
    /// last page.
    pub async fn fetch_all(&self) -> Result<Vec<Bookmark>> {
        let mut bookmarks = Vec::new();
        let mut next = Some(format!(
            "{}/api/bookmarks/?limit={}&offset=0",
            self.config.base_url, PAGE_SIZE
        ));

        while let Some(url) = next {
            let page = self.fetch_page(&url).await?;
            bookmarks.extend(page.results);
            next = page.next;
        }

        Ok(bookmarks)
    }

    async fn fetch_page(&self, url: &str) -> Result<BookmarkPage> {
        let response = self
            .get_with_retry(url, REQUEST_TIMEOUT, RETRY_ATTEMPTS)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Bookmark listing request failed: {}",
                response.status()
            ));
        }

        let page: BookmarkPage = response.json().await?;
        Ok(page)
    }

    async fn get_with_retry(
        &self,
        url: &str,
        timeout: Duration,
        attempts: usize,
    ) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..attempts {
            let response = self
                .http_client
                .get(url)
                .header(
                    "Authorization",
                    format!("Token {}", self.config.api_token),
                )
                .timeout(timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == attempts {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }
}
