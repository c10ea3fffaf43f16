//! rdap-resolve - IP ownership resolution over RDAP
//!
//! Resolves registrant name and organization for an IP address by consulting
//! the RDAP ecosystem: IANA bootstrap documents pick the authoritative
//! regional server, the server's response is projected down to the two
//! ownership fields. Private and loopback addresses never leave the process.

pub mod bootstrap;
pub mod error;
pub mod fetch;
pub mod ip;
pub mod rdap;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use error::{RdapResolveError, Result};
pub use fetch::{FetchResponse, HttpFetch, ReqwestFetcher};
pub use types::{IpClass, IpFamily, Ownership, OwnershipResult, ResolverConfig};

// Re-export main functionality
pub use rdap::{RdapObject, RdapRemark};
pub use resolver::OwnershipResolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
