//! Core types and structures for rdap-resolve

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// IP address family, derived structurally from the textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    /// Determine the family of a textual address. An address is IPv6 iff it
    /// contains a colon; the family is never passed explicitly.
    pub fn of(ip: &str) -> Self {
        if ip.contains(':') {
            IpFamily::V6
        } else {
            IpFamily::V4
        }
    }
}

impl std::fmt::Display for IpFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "ipv4"),
            IpFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// Classification of an address with respect to the public internet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpClass {
    /// Reserved, private, loopback, or link-local: never queried upstream.
    Private,
    /// Anything else, including unparseable input (fail open).
    Public,
}

/// The two fields projected out of an RDAP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub name: String,
    pub organization: String,
}

/// Result of a successful ownership resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipResult {
    /// The address the resolution was performed for.
    pub client_ip: String,
    /// Registrant name, empty when the upstream object had none.
    pub name: String,
    /// Registrant organization, empty when none could be extracted.
    pub organization: String,
    /// When the resolution completed.
    pub resolved_at: DateTime<Utc>,
}

impl OwnershipResult {
    /// The fixed result returned for private addresses, with no network access.
    pub fn internal(client_ip: impl Into<String>) -> Self {
        Self {
            client_ip: client_ip.into(),
            name: "internal".to_string(),
            organization: String::new(),
            resolved_at: Utc::now(),
        }
    }
}

/// Resolver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on each external fetch (bootstrap document, RDAP query).
    pub timeout: Duration,
    /// How long a fetched bootstrap document stays fresh.
    pub bootstrap_ttl: Duration,
    /// User agent presented to IANA and RDAP servers.
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            bootstrap_ttl: Duration::from_secs(86_400),
            user_agent: format!("rdap-resolve/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
