//! Address utilities: private/public classification and CIDR containment.
//!
//! Both functions are pure and total. Classification fails open (unparseable
//! input is public, costing at most one wasted lookup); prefix matching fails
//! closed (unparseable input never matches).

pub mod classify;
pub mod prefix;

pub use classify::classify;
pub use prefix::matches;
