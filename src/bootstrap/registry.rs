//! TTL-cached acquisition of the IANA bootstrap documents.

use crate::bootstrap::{bootstrap_url, BootstrapDocument};
use crate::error::{RdapResolveError, Result};
use crate::fetch::HttpFetch;
use crate::types::IpFamily;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Owns the per-family bootstrap documents and refreshes them on expiry.
///
/// One document is cached per family, with a single fetch stamp shared by the
/// pair. The fetch itself runs outside the lock; concurrent refreshes of the
/// same document are idempotent and the last writer wins. A failed refresh
/// never evicts: a stale document keeps being served until a fetch succeeds.
pub struct BootstrapRegistry {
    fetcher: Arc<dyn HttpFetch>,
    ttl: ChronoDuration,
    state: RwLock<CacheState>,
}

#[derive(Default)]
struct CacheState {
    v4: Option<Arc<BootstrapDocument>>,
    v6: Option<Arc<BootstrapDocument>>,
    fetched_at: Option<DateTime<Utc>>,
}

impl CacheState {
    fn document(&self, family: IpFamily) -> Option<Arc<BootstrapDocument>> {
        match family {
            IpFamily::V4 => self.v4.clone(),
            IpFamily::V6 => self.v6.clone(),
        }
    }
}

impl BootstrapRegistry {
    /// Create a registry backed by the given fetcher, refreshing documents
    /// older than `ttl`.
    pub fn new(fetcher: Arc<dyn HttpFetch>, ttl: Duration) -> Self {
        let ttl = ChronoDuration::from_std(ttl).unwrap_or_else(|_| ChronoDuration::hours(24));
        Self {
            fetcher,
            ttl,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Get the bootstrap document for an address family, from cache when
    /// fresh, fetching otherwise.
    pub async fn get(&self, family: IpFamily) -> Result<Arc<BootstrapDocument>> {
        let now = Utc::now();

        if let Some(doc) = self.fresh(family, now) {
            tracing::debug!(%family, "bootstrap cache hit");
            return Ok(doc);
        }

        let url = bootstrap_url(family);
        match self.fetch_document(url).await {
            Ok(doc) => {
                let doc = Arc::new(doc);
                let mut state = self.state.write();
                match family {
                    IpFamily::V4 => state.v4 = Some(Arc::clone(&doc)),
                    IpFamily::V6 => state.v6 = Some(Arc::clone(&doc)),
                }
                state.fetched_at = Some(now);
                tracing::debug!(%family, url, services = doc.services.len(), "bootstrap document refreshed");
                Ok(doc)
            }
            Err(err) => {
                // Keep serving whatever we still have over failing the caller.
                if let Some(stale) = self.state.read().document(family) {
                    tracing::warn!(%family, url, error = %err, "bootstrap refresh failed, serving stale document");
                    return Ok(stale);
                }
                tracing::warn!(%family, url, error = %err, "bootstrap fetch failed with cold cache");
                Err(err)
            }
        }
    }

    fn fresh(&self, family: IpFamily, now: DateTime<Utc>) -> Option<Arc<BootstrapDocument>> {
        let state = self.state.read();
        let stamp = state.fetched_at?;
        if now - stamp >= self.ttl {
            return None;
        }
        state.document(family)
    }

    async fn fetch_document(&self, url: &str) -> Result<BootstrapDocument> {
        let response = self
            .fetcher
            .get(url)
            .await
            .map_err(|e| RdapResolveError::bootstrap_fetch(url, e.to_string(), None))?;

        if !response.is_success() {
            return Err(RdapResolveError::bootstrap_fetch(
                url,
                format!("unexpected status {}", response.status),
                Some(response.status),
            ));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| RdapResolveError::bootstrap_fetch(url, e.to_string(), None))
    }
}
