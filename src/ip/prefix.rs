//! Bit-precise CIDR containment for textual addresses.
//!
//! String-prefix shortcuts are not good enough here: bootstrap prefixes are
//! not nibble-aligned in general, so both families compare at the bit level
//! after full expansion.

use crate::types::IpFamily;

/// Whether `ip` falls inside the CIDR range `prefix` (e.g. `"10.0.0.0/8"`,
/// `"2001:db8::/32"`).
///
/// Fails closed: a family mismatch between the operands, a malformed address,
/// or an out-of-range prefix length yields `false`, never an error.
pub fn matches(ip: &str, prefix: &str) -> bool {
    if IpFamily::of(ip) != IpFamily::of(prefix) {
        return false;
    }

    let matched = match IpFamily::of(ip) {
        IpFamily::V4 => matches_v4(ip, prefix),
        IpFamily::V6 => matches_v6(ip, prefix),
    };

    match matched {
        Some(m) => m,
        None => {
            tracing::debug!(ip, prefix, "unparseable operand in prefix match");
            false
        }
    }
}

fn matches_v4(ip: &str, prefix: &str) -> Option<bool> {
    let (network, bits) = split_cidr(prefix, 32)?;
    let ip = parse_octets(ip)?;
    let network = parse_octets(network)?;

    let full = (bits / 8) as usize;
    if ip[..full] != network[..full] {
        return Some(false);
    }

    let remainder = bits % 8;
    if remainder > 0 {
        let mask = (256u16 - (1u16 << (8 - remainder))) as u8;
        if ip[full] & mask != network[full] & mask {
            return Some(false);
        }
    }

    Some(true)
}

fn matches_v6(ip: &str, prefix: &str) -> Option<bool> {
    let (network, bits) = split_cidr(prefix, 128)?;
    let ip = expand_groups(ip)?;
    let network = expand_groups(network)?;

    let full = (bits / 16) as usize;
    if ip[..full] != network[..full] {
        return Some(false);
    }

    let remainder = bits % 16;
    if remainder > 0 {
        let mask = 0xFFFF - ((1u16 << (16 - remainder)) - 1);
        if ip[full] & mask != network[full] & mask {
            return Some(false);
        }
    }

    Some(true)
}

fn split_cidr(prefix: &str, max_bits: u32) -> Option<(&str, u32)> {
    let (network, bits) = prefix.split_once('/')?;
    let bits: u32 = bits.parse().ok()?;
    (bits <= max_bits).then_some((network, bits))
}

fn parse_octets(addr: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in addr.split('.') {
        if count == 4 {
            return None;
        }
        octets[count] = part.parse().ok()?;
        count += 1;
    }
    (count == 4).then_some(octets)
}

/// Expand a textual IPv6 address to its 8 16-bit groups, resolving a `::`
/// elision by inserting the right number of zero groups.
fn expand_groups(addr: &str) -> Option<[u16; 8]> {
    fn parse_side(side: &str) -> Option<Vec<u16>> {
        if side.is_empty() {
            return Some(Vec::new());
        }
        side.split(':')
            .map(|group| {
                if group.is_empty() || group.len() > 4 {
                    None
                } else {
                    u16::from_str_radix(group, 16).ok()
                }
            })
            .collect()
    }

    let mut groups = [0u16; 8];
    match addr.split_once("::") {
        Some((head, tail)) => {
            // A second "::" leaves an empty group on one side and fails there.
            let head = parse_side(head)?;
            let tail = parse_side(tail)?;
            if head.len() + tail.len() > 7 {
                return None;
            }
            groups[..head.len()].copy_from_slice(&head);
            groups[8 - tail.len()..].copy_from_slice(&tail);
            Some(groups)
        }
        None => {
            let full = parse_side(addr)?;
            if full.len() != 8 {
                return None;
            }
            groups.copy_from_slice(&full);
            Some(groups)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_full_octets() {
        assert!(matches("10.1.2.3", "10.0.0.0/8"));
        assert!(!matches("11.1.2.3", "10.0.0.0/8"));
        assert!(matches("192.0.2.10", "192.0.2.0/24"));
        assert!(!matches("192.0.3.10", "192.0.2.0/24"));
    }

    #[test]
    fn test_v4_partial_octet() {
        // /25 splits the last octet at bit 1: 0..=127 in, 128..=255 out.
        assert!(matches("192.168.1.127", "192.168.1.0/25"));
        assert!(!matches("192.168.1.128", "192.168.1.0/25"));
        // /12: second octet masked with 0xF0.
        assert!(matches("172.31.255.255", "172.16.0.0/12"));
        assert!(!matches("172.32.0.0", "172.16.0.0/12"));
    }

    #[test]
    fn test_v4_extremes() {
        assert!(matches("255.255.255.255", "0.0.0.0/0"));
        assert!(matches("1.2.3.4", "1.2.3.4/32"));
        assert!(!matches("1.2.3.5", "1.2.3.4/32"));
    }

    #[test]
    fn test_v4_bits_beyond_prefix_are_ignored() {
        // Only the top n bits participate.
        for last in [0, 1, 63, 64, 100, 127] {
            assert!(matches(&format!("10.20.30.{last}"), "10.20.30.0/25"));
        }
        for last in [128, 129, 200, 255] {
            assert!(!matches(&format!("10.20.30.{last}"), "10.20.30.0/25"));
        }
    }

    #[test]
    fn test_v6_group_aligned() {
        assert!(matches("2001:db8::1", "2001:db8::/32"));
        assert!(!matches("2002:db8::1", "2001:db8::/32"));
        assert!(matches("2001:db8:ffff:ffff:ffff:ffff:ffff:ffff", "2001:db8::/32"));
    }

    #[test]
    fn test_v6_partial_group() {
        // /33: bit 0 of the third group. 2001:db8:8000::/33 is the upper half.
        assert!(matches("2001:db8:8001::1", "2001:db8:8000::/33"));
        assert!(!matches("2001:db8:7fff::1", "2001:db8:8000::/33"));
        // /52: top 4 bits of the fourth group.
        assert!(matches("2001:db8:0:10ff::", "2001:db8:0:1000::/52"));
        assert!(!matches("2001:db8:0:2000::", "2001:db8:0:1000::/52"));
    }

    #[test]
    fn test_v6_elision_either_operand() {
        assert!(matches("2001:db8:0:0:0:0:0:1", "2001:db8::/32"));
        assert!(matches("2001:db8::1", "2001:db8:0:0:0:0:0:0/32"));
        assert!(matches("::1", "::/0"));
    }

    #[test]
    fn test_v6_full_length_prefix() {
        assert!(matches("2001:db8::1", "2001:db8::1/128"));
        assert!(!matches("2001:db8::2", "2001:db8::1/128"));
    }

    #[test]
    fn test_family_mismatch_fails_closed() {
        assert!(!matches("192.0.2.1", "2001:db8::/32"));
        assert!(!matches("2001:db8::1", "192.0.2.0/24"));
    }

    #[test]
    fn test_malformed_fails_closed() {
        assert!(!matches("192.0.2.1", "192.0.2.0"));
        assert!(!matches("192.0.2.1", "192.0.2.0/33"));
        assert!(!matches("192.0.2.1", "192.0.2.0/x"));
        assert!(!matches("192.0.2.999", "192.0.2.0/24"));
        assert!(!matches("", "10.0.0.0/8"));
        assert!(!matches("2001:db8::1", "2001:db8::/129"));
        assert!(!matches("2001:zzz::1", "2001:db8::/32"));
        assert!(!matches("1:2:3:4:5:6:7:8:9", "::/0"));
        assert!(!matches("1::2::3", "::/0"));
    }

    #[test]
    fn test_expand_groups() {
        assert_eq!(expand_groups("::"), Some([0; 8]));
        assert_eq!(expand_groups("::1"), Some([0, 0, 0, 0, 0, 0, 0, 1]));
        assert_eq!(expand_groups("1::"), Some([1, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(
            expand_groups("2001:db8::ff"),
            Some([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0xff])
        );
        assert_eq!(
            expand_groups("1:2:3:4:5:6:7:8"),
            Some([1, 2, 3, 4, 5, 6, 7, 8])
        );
        // Elision must stand for at least one group.
        assert_eq!(expand_groups("1:2:3:4::5:6:7:8"), None);
        assert_eq!(expand_groups("1:2:3:4:5:6:7"), None);
        assert_eq!(expand_groups("12345::"), None);
    }
}
