//! Proxy/VPN detection for inbound checkout requests.
//!
//! A two-tier header heuristic: traffic carrying a marker header from a
//! known legitimate edge (CDN, reverse proxy, firewall) is trusted outright;
//! otherwise generic proxy-indicating headers flag the request. There is no
//! IP-reputation or hostname lookup here — an earlier hostname-reputation
//! check was removed for unacceptable false positives against legitimate
//! CDN and ISP traffic and must not come back.

mod allowlist;
mod heuristic;

pub use allowlist::IpAllowlist;
pub use heuristic::{ProxyHeuristic, DEFAULT_PROXY_HEADERS, DEFAULT_TRUSTED_HEADERS};
