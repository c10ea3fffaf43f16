//! Top-level ownership resolution.

use crate::bootstrap::BootstrapRegistry;
use crate::error::{RdapResolveError, Result};
use crate::fetch::{HttpFetch, ReqwestFetcher};
use crate::ip;
use crate::rdap::{self, AuthorityResolver, RdapClient, RdapObject};
use crate::types::{IpClass, Ownership, OwnershipResult, ResolverConfig};
use chrono::Utc;
use std::sync::Arc;

/// Resolves ownership metadata for IP addresses over RDAP.
///
/// This is the object the transport layer talks to. Private addresses short-
/// circuit to a fixed result without touching the network; everything else
/// goes through bootstrap-driven authority discovery and a single RDAP query.
pub struct OwnershipResolver {
    config: ResolverConfig,
    client: RdapClient,
}

impl OwnershipResolver {
    /// Create a resolver with default configuration.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create a resolver with custom configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        let fetcher: Arc<dyn HttpFetch> = Arc::new(ReqwestFetcher::new(&config));
        Self::with_fetcher(fetcher, config)
    }

    /// Create a resolver over an explicit fetch implementation. This is the
    /// seam tests use to run the whole pipeline in memory.
    pub fn with_fetcher(fetcher: Arc<dyn HttpFetch>, config: ResolverConfig) -> Self {
        let registry = Arc::new(BootstrapRegistry::new(
            Arc::clone(&fetcher),
            config.bootstrap_ttl,
        ));
        let client = RdapClient::new(fetcher, AuthorityResolver::new(registry));
        Self { config, client }
    }

    /// Resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `{client_ip, name, organization}` for an address.
    ///
    /// Private addresses yield `name = "internal"` immediately. An
    /// unreachable or unparsable upstream yields
    /// [`RdapResolveError::RdapUpstream`] carrying the address, never a
    /// panic; the caller decides how to degrade.
    pub async fn resolve_ownership(&self, ip: &str) -> Result<OwnershipResult> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(RdapResolveError::malformed_address(ip));
        }

        if ip::classify(ip) == IpClass::Private {
            tracing::debug!(ip, "private address, skipping upstream lookup");
            return Ok(OwnershipResult::internal(ip));
        }

        match self.client.query(ip).await {
            Some(object) => {
                let Ownership { name, organization } = rdap::extract(&object);
                Ok(OwnershipResult {
                    client_ip: ip.to_string(),
                    name,
                    organization,
                    resolved_at: Utc::now(),
                })
            }
            None => Err(RdapResolveError::rdap_upstream(ip)),
        }
    }

    /// Fetch the raw RDAP object for an address, for pass-through endpoints.
    /// `None` on any upstream failure, matching [`RdapClient::query`].
    pub async fn fetch_raw(&self, ip: &str) -> Option<RdapObject> {
        let ip = ip.trim();
        if ip.is_empty() {
            return None;
        }
        self.client.query(ip).await
    }
}

impl Default for OwnershipResolver {
    fn default() -> Self {
        Self::new()
    }
}
