use rand::Rng;
use reflect_common::config::redact;
use reflect_common::{ReflectError, Result};
use std::fmt;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::selection::{favorites, pick_random};
use crate::types::{Highlight, Page};

/// Production Readwise host
pub const READWISE_BASE_URL: &str = "https://readwise.io";

/// Highlights requested per page
pub const PAGE_SIZE: u32 = 500;

/// Readwise highlights API client
#[derive(Clone)]
pub struct ReadwiseClient {
    base_url: String,
    token: String,
    client: Client,
}

impl fmt::Debug for ReadwiseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadwiseClient")
            .field("base_url", &self.base_url)
            .field("token", &redact(&self.token))
            .finish_non_exhaustive()
    }
}

impl ReadwiseClient {
    /// Create client for the production Readwise API
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(READWISE_BASE_URL, token)
    }

    /// Create client against an alternate host
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ReflectError::network(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Readwise client initialized: {}", base_url);
        Ok(Self {
            base_url,
            token: token.into(),
            client,
        })
    }

    /// URL of the first highlights page
    pub fn first_page_url(&self) -> String {
        format!("{}/api/v2/highlights?page_size={}", self.base_url, PAGE_SIZE)
    }

    /// Fetch and decode a single page
    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        debug!("Fetching highlights page: {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| ReflectError::network(format!("Failed to send highlights request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReflectError::network(format!("Failed to read highlights response: {}", e)))?;

        if !status.is_success() {
            return Err(ReflectError::api(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ReflectError::decode(format!("Failed to parse highlights page: {}", e)))
    }

    /// Follow `next` cursors until the last page, accumulating every highlight
    pub async fn fetch_all_highlights(&self) -> Result<Vec<Highlight>> {
        let mut highlights = Vec::new();
        let mut next_url = Some(self.first_page_url());
        let mut pages = 0usize;

        while let Some(url) = next_url.take() {
            let page = self.fetch_page(&url).await?;
            pages += 1;

            if let Some(next) = page.next_url() {
                let parsed = Url::parse(next).map_err(|e| {
                    ReflectError::decode(format!("Invalid next page URL '{}': {}", next, e))
                })?;
                next_url = Some(parsed.into());
            }

            debug!("Page {}: {} highlights", pages, page.results.len());
            highlights.extend(page.results);
        }

        info!("Fetched {} highlights across {} pages", highlights.len(), pages);
        Ok(highlights)
    }

    /// Random favorite highlight text, empty when nothing is tagged favorite
    pub async fn favorite_quote<R>(&self, rng: &mut R) -> Result<String>
    where
        R: Rng + ?Sized,
    {
        let highlights = self.fetch_all_highlights().await?;
        let candidates = favorites(&highlights);
        info!("Found {} favorite highlights", candidates.len());

        match pick_random(&candidates, rng) {
            Some(highlight) => {
                debug!("Selected highlight {}", highlight.id);
                Ok(highlight.text.clone())
            }
            None => Ok(String::new()),
        }
    }
}
