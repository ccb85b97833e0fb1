//! HTTP plumbing: one impersonated client per run, shared by every
//! resolver so connections are reused. Requests are strictly sequential.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Per-request budget; a slow upstream only costs this much.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Sent on every request so polite crawls are identifiable.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; jobscout/0.1)";

/// Build the client used for the whole run.
pub fn create_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Explicit fetch outcome so callers branch on a tag instead of catching
/// errors: timeouts, DNS failures and non-2xx statuses all collapse into
/// `Unavailable`.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(String),
    Unavailable,
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client()?,
        })
    }

    /// GET a page body, following redirects.
    pub async fn fetch_text(&self, url: &str) -> FetchOutcome {
        let Ok(response) = self.client.get(url).send().await else {
            log::debug!("[FETCH] Request failed: {}", url);
            return FetchOutcome::Unavailable;
        };
        if !response.status().is_success() {
            log::debug!("[FETCH] Status {} for: {}", response.status(), url);
            return FetchOutcome::Unavailable;
        }
        match response.text().await {
            Ok(text) => FetchOutcome::Fetched(text),
            Err(_) => {
                log::debug!("[FETCH] Failed to read body: {}", url);
                FetchOutcome::Unavailable
            }
        }
    }

    /// HEAD existence check; returns the final URL after redirects when the
    /// status is below 400.
    pub async fn probe_head(&self, url: &str) -> Option<String> {
        let response = self.client.head(url).send().await.ok()?;
        if response.status().as_u16() < 400 {
            Some(response.url().to_string())
        } else {
            log::trace!("[FETCH] Probe {} for: {}", response.status(), url);
            None
        }
    }
}
