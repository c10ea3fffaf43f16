//! IANA RDAP bootstrap documents.
//!
//! Endpoint knowledge is centralized here (convention over configuration):
//! the two per-family service-list URLs and the fallback server used when no
//! bootstrap entry is authoritative.

pub mod registry;

pub use registry::BootstrapRegistry;

use crate::types::IpFamily;
use serde::Deserialize;

/// IANA bootstrap service list for IPv4 address space.
pub const IANA_IPV4_BOOTSTRAP_URL: &str = "https://data.iana.org/rdap/ipv4.json";
/// IANA bootstrap service list for IPv6 address space.
pub const IANA_IPV6_BOOTSTRAP_URL: &str = "https://data.iana.org/rdap/ipv6.json";
/// Server queried when the bootstrap data yields no authority.
pub const DEFAULT_RDAP_SERVER: &str = "https://rdap.db.ripe.net/ip/";

/// The bootstrap document URL for an address family.
pub fn bootstrap_url(family: IpFamily) -> &'static str {
    match family {
        IpFamily::V4 => IANA_IPV4_BOOTSTRAP_URL,
        IpFamily::V6 => IANA_IPV6_BOOTSTRAP_URL,
    }
}

/// One service entry: a set of CIDR prefixes and the RDAP base URLs
/// authoritative for them. On the wire this is a two-element array.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapService(pub Vec<String>, pub Vec<String>);

impl BootstrapService {
    /// CIDR prefixes covered by this entry.
    pub fn prefixes(&self) -> &[String] {
        &self.0
    }

    /// RDAP base URLs for this entry, in publication order.
    pub fn server_urls(&self) -> &[String] {
        &self.1
    }
}

/// A parsed IANA bootstrap document for one address family.
///
/// Service order is preserved: authority selection takes the first matching
/// entry, mirroring upstream semantics where per-family prefixes do not
/// overlap.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapDocument {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub services: Vec<BootstrapService>,
}
