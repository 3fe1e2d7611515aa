use std::net::IpAddr;

use crate::detection::allowlist::IpAllowlist;
use crate::types::HeaderMap;

/// Connecting-client-IP headers set by known legitimate edges. Presence of
/// any of these means the request passed through a CDN, reverse proxy, or
/// firewall we trust, and detection short-circuits to "not a proxy".
/// Matched by name, case-sensitively, in order.
pub const DEFAULT_TRUSTED_HEADERS: [&str; 5] = [
    "CF-Connecting-IP",  // Cloudflare
    "True-Client-IP",    // Akamai, Cloudflare Enterprise
    "X-Sucuri-ClientIP", // Sucuri firewall
    "Incap-Client-IP",   // Imperva Incapsula
    "X-Real-IP",         // nginx and common reverse proxies
];

/// Generic proxy-indicating headers. Only consulted when no trusted edge
/// header is present.
pub const DEFAULT_PROXY_HEADERS: [&str; 4] = [
    "Via",
    "Proxy-Connection",
    "Proxy-Authorization",
    "X-Proxy-ID",
];

/// Two-tier header heuristic for spotting proxy/VPN checkout traffic.
///
/// Trust evaluation always precedes proxy-signal evaluation, so a request
/// can never be both trusted and flagged. Header names are matched by
/// presence of a non-empty value, never by value content. Stateless and
/// safe to share across any number of callers.
#[derive(Debug, Clone)]
pub struct ProxyHeuristic {
    trusted_headers: Vec<String>,
    proxy_headers: Vec<String>,
    allowlist: IpAllowlist,
}

impl Default for ProxyHeuristic {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRUSTED_HEADERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_PROXY_HEADERS.iter().map(|s| s.to_string()).collect(),
            IpAllowlist::empty(),
        )
    }
}

impl ProxyHeuristic {
    pub fn new(
        trusted_headers: Vec<String>,
        proxy_headers: Vec<String>,
        allowlist: IpAllowlist,
    ) -> Self {
        Self {
            trusted_headers,
            proxy_headers,
            allowlist,
        }
    }

    /// Classify a request's header set.
    ///
    /// Returns `true` only when a proxy-indicating header is present and no
    /// trusted edge header is. Total over all inputs: absent or malformed
    /// headers simply fail the presence checks.
    pub fn looks_like_proxy(&self, headers: &HeaderMap) -> bool {
        // Trust check first; a trusted edge marker ends the evaluation.
        if self
            .trusted_headers
            .iter()
            .any(|name| header_present(headers, name))
        {
            return false;
        }

        self.proxy_headers
            .iter()
            .any(|name| header_present(headers, name))
    }

    /// Full check for a resolved client: an allowlisted IP bypasses the
    /// header heuristic entirely.
    pub fn check(&self, client_ip: Option<IpAddr>, headers: &HeaderMap) -> bool {
        if let Some(ip) = client_ip {
            if self.allowlist.contains(ip) {
                return false;
            }
        }
        self.looks_like_proxy(headers)
    }

    pub fn allowlist(&self) -> &IpAllowlist {
        &self.allowlist
    }
}

/// A header counts only when present with a non-whitespace value.
fn header_present(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}
