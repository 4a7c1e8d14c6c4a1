//! Transport seam between the adapters and the network.
//!
//! Adapters never touch `reqwest` directly: they hold a [`PageFetcher`]
//! and get page bodies back as strings, which keeps the non-`Send` HTML
//! tree out of futures and lets tests substitute fixture documents.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tokio_util::sync::CancellationToken;

use crate::error::{ProviderError, Result};

const DEFAULT_USER_AGENT: &str = "metascout/0.1";

/// Fetches a URL and returns the raw page body.
///
/// Implementations must honor the cancellation token at every await
/// point: a cancelled fetch fails with [`ProviderError::Cancelled`]
/// instead of returning partial data.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String>;
}

/// Production [`PageFetcher`] backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String> {
        log::debug!("GET {}", url);

        let request = self.client.get(url).header(USER_AGENT, &self.user_agent);

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(ProviderError::Cancelled),
            response = request.send() => response?.error_for_status()?,
        };

        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(ProviderError::Cancelled),
            body = response.text() => body?,
        };

        Ok(body)
    }
}
