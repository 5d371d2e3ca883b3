// src/carzone/client.rs
use crate::utils::error::FetchError;
use reqwest::header;
use std::time::Duration;

// Carzone serves a cut-down page to unknown agents.
const LISTING_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,*/*;q=0.8";
// Pause between attempts when retries are enabled.
const RETRY_DELAY_MS: u64 = 500;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can turn a locator into page markup.
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client for listing pages. One per process.
#[derive(Debug, Clone)]
pub struct ListingClient {
    http: reqwest::Client,
    retries: u32,
}

impl ListingClient {
    /// Creates a client with a per-request `timeout` and up to `retries` extra attempts per page.
    pub fn new(timeout: Duration, retries: u32) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(LISTING_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { http, retries })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(classify)?;

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http(status));
        }

        // Any content type is treated as an HTML document
        let body = response.text().await.map_err(classify)?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

impl PageSource for ListingClient {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries && e.is_retryable() => {
                    attempt += 1;
                    tracing::warn!("Attempt {} for {} failed ({}), retrying", attempt, url, e);
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e)
    }
}
