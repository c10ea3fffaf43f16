//! Authority discovery: which RDAP server answers for an address.

use crate::bootstrap::{BootstrapRegistry, DEFAULT_RDAP_SERVER};
use crate::ip;
use crate::types::IpFamily;
use std::sync::Arc;

/// Picks the RDAP base URL authoritative for an address via the bootstrap
/// data, falling back to [`DEFAULT_RDAP_SERVER`].
///
/// Never fails outward: bootstrap trouble of any kind degrades to the
/// default server.
pub struct AuthorityResolver {
    registry: Arc<BootstrapRegistry>,
}

impl AuthorityResolver {
    pub fn new(registry: Arc<BootstrapRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the RDAP base URL for `ip`.
    ///
    /// Entries are scanned in document order and the first whose prefix set
    /// contains the address wins; bootstrap prefixes within a family do not
    /// overlap, so no most-specific tie-break is needed. Within the winning
    /// entry the first `https` URL is preferred, else the first URL.
    pub async fn resolve_server(&self, ip: &str) -> String {
        let family = IpFamily::of(ip);
        let doc = match self.registry.get(family).await {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(ip, %family, error = %err, "bootstrap unavailable, using default RDAP server");
                return DEFAULT_RDAP_SERVER.to_string();
            }
        };

        for service in &doc.services {
            if !service.prefixes().iter().any(|p| ip::matches(ip, p)) {
                continue;
            }
            let urls = service.server_urls();
            if let Some(https) = urls.iter().find(|u| u.starts_with("https://")) {
                return https.clone();
            }
            if let Some(first) = urls.first() {
                return first.clone();
            }
            // Entry matched but listed no URLs; keep scanning.
        }

        tracing::debug!(ip, %family, "no bootstrap entry matched, using default RDAP server");
        DEFAULT_RDAP_SERVER.to_string()
    }
}
