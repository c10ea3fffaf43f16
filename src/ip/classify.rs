//! Private/public address classification.

use crate::types::{IpClass, IpFamily};

/// Classify a textual address as private or public.
///
/// Private here covers RFC 1918 space, loopback, IPv6 link-local and
/// unique-local. Unparseable input classifies as [`IpClass::Public`]: a wrong
/// "public" answer only triggers one extra upstream lookup, while a wrong
/// "private" answer would silently suppress resolution.
pub fn classify(ip: &str) -> IpClass {
    match IpFamily::of(ip) {
        IpFamily::V4 => classify_v4(ip),
        IpFamily::V6 => classify_v6(ip),
    }
}

fn classify_v4(ip: &str) -> IpClass {
    let octets = match parse_octets(ip) {
        Some(octets) => octets,
        None => return IpClass::Public,
    };

    // 10.0.0.0/8
    if octets[0] == 10 {
        return IpClass::Private;
    }
    // 172.16.0.0/12
    if octets[0] == 172 && (16..=31).contains(&octets[1]) {
        return IpClass::Private;
    }
    // 192.168.0.0/16
    if octets[0] == 192 && octets[1] == 168 {
        return IpClass::Private;
    }
    // Loopback 127.0.0.0/8
    if octets[0] == 127 {
        return IpClass::Private;
    }

    IpClass::Public
}

fn classify_v6(ip: &str) -> IpClass {
    let lower = ip.to_lowercase();

    // Loopback, compressed or fully expanded
    if lower == "::1" || lower == "0:0:0:0:0:0:0:1" {
        return IpClass::Private;
    }
    // Link-local fe80::/10
    if lower.starts_with("fe80:") {
        return IpClass::Private;
    }
    // Unique-local fc00::/7, approximated by the first hextet's leading byte
    if lower.starts_with("fc") || lower.starts_with("fd") {
        return IpClass::Private;
    }

    IpClass::Public
}

fn parse_octets(ip: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in ip.split('.') {
        if count == 4 {
            return None;
        }
        octets[count] = part.parse().ok()?;
        count += 1;
    }
    (count == 4).then_some(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_private(ip: &str) -> bool {
        classify(ip) == IpClass::Private
    }

    #[test]
    fn test_rfc1918_ranges() {
        assert!(is_private("10.0.0.5"));
        assert!(is_private("10.255.255.255"));
        assert!(is_private("172.16.0.1"));
        assert!(is_private("172.31.255.254"));
        assert!(is_private("192.168.0.1"));
        assert!(is_private("192.168.255.255"));
    }

    #[test]
    fn test_rfc1918_boundaries() {
        assert!(!is_private("172.15.255.255"));
        assert!(!is_private("172.32.0.0"));
        assert!(!is_private("192.167.0.1"));
        assert!(!is_private("11.0.0.0"));
        assert!(!is_private("9.255.255.255"));
    }

    #[test]
    fn test_v4_loopback() {
        assert!(is_private("127.0.0.1"));
        assert!(is_private("127.255.0.1"));
    }

    #[test]
    fn test_public_v4() {
        assert!(!is_private("8.8.8.8"));
        assert!(!is_private("203.0.113.1"));
    }

    #[test]
    fn test_malformed_v4_is_public() {
        // Fail open: junk input never short-circuits resolution.
        assert!(!is_private(""));
        assert!(!is_private("10"));
        assert!(!is_private("10.0.0"));
        assert!(!is_private("10.0.0.0.0"));
        assert!(!is_private("10.0.0.256"));
        assert!(!is_private("10.0.0.x"));
        assert!(!is_private("not-an-address"));
    }

    #[test]
    fn test_v6_loopback() {
        assert!(is_private("::1"));
        assert!(is_private("0:0:0:0:0:0:0:1"));
    }

    #[test]
    fn test_v6_link_local() {
        assert!(is_private("fe80::1"));
        assert!(is_private("FE80::ABCD"));
        // fe8 prefix alone is not link-local
        assert!(!is_private("fe8::1"));
    }

    #[test]
    fn test_v6_unique_local() {
        assert!(is_private("fc00::1"));
        assert!(is_private("fd12:3456::1"));
        assert!(is_private("FD00::1"));
    }

    #[test]
    fn test_public_v6() {
        assert!(!is_private("2001:db8::1"));
        assert!(!is_private("2606:4700::6810:85e5"));
        assert!(!is_private("::2"));
    }

    #[test]
    fn test_total_on_garbage() {
        // Must never panic, whatever the input.
        for input in [":", "::::", "....", "1.2.3.4.5.6", "fe80", "😀", "\0"] {
            let _ = classify(input);
        }
    }
}
