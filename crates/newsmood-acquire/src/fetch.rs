use anyhow::{Context, Result};
use async_trait::async_trait;
use newsmood_model::{FetchFailure, FetchOutcome};
use std::time::Duration;

/// Total time budget for one page request, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect hops followed before the request is treated as failed.
pub const MAX_REDIRECTS: usize = 10;

/// Desktop browser identity; many news sites turn away obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Fetches one page. Implementations never return an error: every fault is
/// folded into `FetchOutcome::Failure` so one bad URL can't sink a batch.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// `PageFetcher` backed by a single pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    /// The underlying client, for sharing its connection pool with the search provider.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Build the shared HTTP client: browser user agent, bounded redirects, fixed timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .context("Failed to build HTTP client")
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = describe_error(&e);
                tracing::error!(url = %url, error = %reason, "Request error");
                return FetchOutcome::Failure(FetchFailure::Network { reason });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            tracing::error!(
                url = %url,
                status = status.as_u16(),
                reason = %reason,
                "HTTP status error"
            );
            return FetchOutcome::Failure(FetchFailure::HttpStatus {
                status: status.as_u16(),
                reason,
            });
        }

        match response.text().await {
            Ok(body) => {
                tracing::debug!(url = %url, bytes = body.len(), "Fetched page");
                FetchOutcome::Success { body }
            }
            Err(e) => {
                let reason = describe_error(&e);
                tracing::error!(url = %url, error = %reason, "Failed to read response body");
                FetchOutcome::Failure(FetchFailure::Network { reason })
            }
        }
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else if e.is_redirect() {
        format!("too many redirects: {e}")
    } else {
        format!("request error: {e}")
    }
}
