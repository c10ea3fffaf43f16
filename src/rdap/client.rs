//! The RDAP query itself.

use crate::fetch::HttpFetch;
use crate::rdap::AuthorityResolver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An RDAP IP-network response, loosely structured.
///
/// Only `name` and `remarks` are modeled; everything else the server sent is
/// retained in `extra` so the raw object can be re-serialized losslessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdapObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<RdapRemark>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of the RDAP `remarks` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdapRemark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Issues RDAP queries against whatever authority the bootstrap data names.
///
/// Every failure mode (transport, non-2xx status, unparsable body) collapses
/// to `None`; nothing escapes this boundary as an error.
pub struct RdapClient {
    fetcher: Arc<dyn HttpFetch>,
    authority: AuthorityResolver,
}

impl RdapClient {
    pub fn new(fetcher: Arc<dyn HttpFetch>, authority: AuthorityResolver) -> Self {
        Self { fetcher, authority }
    }

    /// Query the authoritative RDAP server for `ip`.
    pub async fn query(&self, ip: &str) -> Option<RdapObject> {
        let base = self.authority.resolve_server(ip).await;
        let url = Self::endpoint(&base, ip);
        tracing::debug!(ip, url, "querying RDAP endpoint");

        let response = match self.fetcher.get(&url).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(ip, url, error = %err, "RDAP request failed");
                return None;
            }
        };

        if !response.is_success() {
            tracing::warn!(ip, url, status = response.status, "RDAP request returned non-success status");
            return None;
        }

        match serde_json::from_str(&response.body) {
            Ok(object) => Some(object),
            Err(err) => {
                tracing::warn!(ip, url, error = %err, "RDAP response body was not parseable");
                None
            }
        }
    }

    // Base URLs published in the bootstrap data end in `/` and take an `ip/`
    // segment; a base without the trailing slash gets the address appended
    // directly. The asymmetry matches live RDAP server behavior and is
    // deliberately not normalized.
    fn endpoint(base: &str, ip: &str) -> String {
        if base.ends_with('/') {
            format!("{base}ip/{ip}")
        } else {
            format!("{base}/{ip}")
        }
    }
}
