//! RDAP query pipeline: authority discovery, the query itself, and the
//! projection of the response down to ownership fields.

pub mod authority;
pub mod client;
pub mod extract;

pub use authority::AuthorityResolver;
pub use client::{RdapClient, RdapObject, RdapRemark};
pub use extract::extract;
