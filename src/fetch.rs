//! HTTP fetch seam.
//!
//! Everything that leaves the process goes through [`HttpFetch`], so the
//! bootstrap registry and the RDAP client can be exercised against in-memory
//! fetchers instead of live endpoints.

use crate::error::{RdapResolveError, Result};
use crate::types::ResolverConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A plain HTTP response: status code and body text.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET capability consumed by the resolution core.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issue a GET and return the status and body. Transport-level failures
    /// (connect, timeout) are errors; non-2xx statuses are not, since callers
    /// decide what a given status means.
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}

/// Production fetcher backed by a shared `reqwest` client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Build a fetcher from resolver configuration.
    pub fn new(config: &ResolverConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create configured HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self { client }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RdapResolveError::from)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RdapResolveError::network(e.to_string(), Some(status), Some(url.to_string())))?;

        Ok(FetchResponse { status, body })
    }
}
