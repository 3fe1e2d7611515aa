//! Allowlist of client IPs and CIDR blocks that bypass proxy detection.
//!
//! Entries are parsed up front so a bad config fails at construction time;
//! `contains` itself is infallible.

use std::collections::HashSet;
use std::net::IpAddr;

use crate::error::{GuardError, Result};

/// Allowlist of IPs and CIDR blocks that are never flagged as proxies.
#[derive(Debug, Clone, Default)]
pub struct IpAllowlist {
    ips: HashSet<IpAddr>,
    cidrs: Vec<(IpAddr, u8)>, // (network address, prefix length)
}

impl IpAllowlist {
    /// Create an empty allowlist.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an allowlist from config entries. Each entry is either a
    /// literal IP (`103.108.140.5`) or a CIDR block (`103.108.140.0/24`).
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut allowlist = Self::empty();
        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.contains('/') {
                allowlist.add_cidr_str(trimmed)?;
            } else {
                allowlist.add_ip_str(trimmed)?;
            }
        }
        Ok(allowlist)
    }

    /// Parse and add a single IP address.
    pub fn add_ip_str(&mut self, ip_str: &str) -> Result<()> {
        let ip: IpAddr = ip_str
            .parse()
            .map_err(|_| GuardError::InvalidIp(ip_str.to_string()))?;
        self.ips.insert(ip);
        Ok(())
    }

    /// Parse and add a CIDR block (e.g. "10.0.0.0/24" or "2400:c600::/32").
    pub fn add_cidr_str(&mut self, cidr_str: &str) -> Result<()> {
        let (ip_part, prefix_part) = cidr_str
            .split_once('/')
            .ok_or_else(|| GuardError::InvalidCidr(cidr_str.to_string()))?;

        let ip: IpAddr = ip_part
            .parse()
            .map_err(|_| GuardError::InvalidCidr(cidr_str.to_string()))?;
        let prefix_len: u8 = prefix_part
            .parse()
            .map_err(|_| GuardError::InvalidCidr(cidr_str.to_string()))?;

        let max_prefix = match ip {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix_len > max_prefix {
            return Err(GuardError::InvalidCidr(cidr_str.to_string()));
        }

        // Store the masked network address so containment is a mask-and-compare
        let network = mask_ip(ip, prefix_len);
        self.cidrs.push((network, prefix_len));
        Ok(())
    }

    /// Check whether `ip` is covered by this allowlist.
    pub fn contains(&self, ip: IpAddr) -> bool {
        if self.ips.contains(&ip) {
            return true;
        }
        self.cidrs
            .iter()
            .any(|&(network, prefix_len)| mask_ip(ip, prefix_len) == network)
    }

    /// Number of entries (IPs plus CIDR blocks).
    pub fn len(&self) -> usize {
        self.ips.len() + self.cidrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty() && self.cidrs.is_empty()
    }
}

/// Zero the host bits of `ip` beyond `prefix_len`. An IPv4 address masked
/// with an IPv6-length prefix never equals an IPv6 network, so mixed
/// families simply never match.
fn mask_ip(ip: IpAddr, prefix_len: u8) -> IpAddr {
    match ip {
        IpAddr::V4(v4) => {
            let bits = u32::from(v4);
            let mask = if prefix_len == 0 {
                0
            } else if prefix_len >= 32 {
                u32::MAX
            } else {
                u32::MAX << (32 - prefix_len)
            };
            IpAddr::V4((bits & mask).into())
        }
        IpAddr::V6(v6) => {
            let bits = u128::from(v6);
            let mask = if prefix_len == 0 {
                0
            } else if prefix_len >= 128 {
                u128::MAX
            } else {
                u128::MAX << (128 - prefix_len)
            };
            IpAddr::V6((bits & mask).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn empty_allowlist_contains_nothing() {
        let allowlist = IpAllowlist::empty();
        assert!(!allowlist.contains(v4(1, 2, 3, 4)));
        assert!(allowlist.is_empty());
    }

    #[test]
    fn literal_ip_matches_exactly() {
        let allowlist = IpAllowlist::from_entries(&["103.108.140.5"]).unwrap();
        assert!(allowlist.contains(v4(103, 108, 140, 5)));
        assert!(!allowlist.contains(v4(103, 108, 140, 6)));
    }

    #[test]
    fn cidr_matches_whole_block() {
        let allowlist = IpAllowlist::from_entries(&["192.168.0.0/24"]).unwrap();
        assert!(allowlist.contains(v4(192, 168, 0, 1)));
        assert!(allowlist.contains(v4(192, 168, 0, 254)));
        assert!(!allowlist.contains(v4(192, 168, 1, 1)));
    }

    #[test]
    fn cidr_host_bits_are_masked_on_insert() {
        // 10.0.0.99/8 normalizes to the 10.0.0.0/8 network
        let allowlist = IpAllowlist::from_entries(&["10.0.0.99/8"]).unwrap();
        assert!(allowlist.contains(v4(10, 255, 255, 255)));
        assert!(!allowlist.contains(v4(11, 0, 0, 1)));
    }

    #[test]
    fn ipv6_cidr_matches() {
        let allowlist = IpAllowlist::from_entries(&["2400:c600::/32"]).unwrap();
        let inside = IpAddr::V6("2400:c600::1".parse::<Ipv6Addr>().unwrap());
        let outside = IpAddr::V6("2400:c601::1".parse::<Ipv6Addr>().unwrap());
        assert!(allowlist.contains(inside));
        assert!(!allowlist.contains(outside));
    }

    #[test]
    fn mixed_families_never_match() {
        let allowlist = IpAllowlist::from_entries(&["0.0.0.0/0"]).unwrap();
        let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert!(!allowlist.contains(v6));
    }

    #[test]
    fn blank_entries_are_skipped() {
        let allowlist = IpAllowlist::from_entries(&["", "  ", "1.2.3.4"]).unwrap();
        assert_eq!(allowlist.len(), 1);
    }

    #[test]
    fn invalid_entries_are_rejected() {
        assert!(matches!(
            IpAllowlist::from_entries(&["not-an-ip"]),
            Err(GuardError::InvalidIp(_))
        ));
        assert!(matches!(
            IpAllowlist::from_entries(&["10.0.0.0/33"]),
            Err(GuardError::InvalidCidr(_))
        ));
        assert!(matches!(
            IpAllowlist::from_entries(&["10.0.0.0/abc"]),
            Err(GuardError::InvalidCidr(_))
        ));
    }
}
