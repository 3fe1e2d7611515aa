use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::detection::{IpAllowlist, DEFAULT_PROXY_HEADERS, DEFAULT_TRUSTED_HEADERS};
use crate::error::{GuardError, Result};

/// Configuration for the checkout guard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Phone validation rule
    pub phone: PhoneRuleConfig,

    /// Proxy/VPN detection rule
    pub proxy: ProxyRuleConfig,
}

/// Phone validation rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRuleConfig {
    /// Whether the rule runs at all
    pub enabled: bool,

    /// Message surfaced to the customer on rejection. The host owns
    /// localization; this is the fallback text.
    pub rejection_message: String,
}

/// Proxy/VPN detection rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyRuleConfig {
    /// Whether the rule runs at all
    pub enabled: bool,

    /// Message surfaced to the customer on rejection
    pub rejection_message: String,

    /// Edge/CDN marker headers that clear a request, checked in order.
    /// Names are case-sensitive.
    pub trusted_headers: Vec<String>,

    /// Proxy-indicating headers that flag a request, checked in order
    pub proxy_headers: Vec<String>,

    /// IPs and CIDR blocks that bypass detection entirely
    pub allowlist: Vec<String>,
}

impl Default for PhoneRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rejection_message: "Please enter a valid Bangladeshi mobile number.".to_string(),
        }
    }
}

impl Default for ProxyRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rejection_message:
                "Checkout is not available over a VPN or proxy connection. Please disable it and try again."
                    .to_string(),
            trusted_headers: DEFAULT_TRUSTED_HEADERS.iter().map(|s| s.to_string()).collect(),
            proxy_headers: DEFAULT_PROXY_HEADERS.iter().map(|s| s.to_string()).collect(),
            allowlist: Vec::new(),
        }
    }
}

impl GuardConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_content = fs::read_to_string(path)
            .map_err(|e| GuardError::Configuration(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&file_content)
            .map_err(|e| GuardError::Configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .map_err(|e| GuardError::Configuration(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, config_json)
            .map_err(|e| GuardError::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate config values
    pub fn validate(&self) -> Result<()> {
        if self.phone.enabled && self.phone.rejection_message.trim().is_empty() {
            return Err(GuardError::Configuration(
                "Phone rejection message cannot be empty".to_string(),
            ));
        }

        if self.proxy.enabled {
            if self.proxy.rejection_message.trim().is_empty() {
                return Err(GuardError::Configuration(
                    "Proxy rejection message cannot be empty".to_string(),
                ));
            }
            if self.proxy.proxy_headers.is_empty() {
                return Err(GuardError::Configuration(
                    "Proxy header list cannot be empty while the proxy rule is enabled"
                        .to_string(),
                ));
            }
        }

        // Allowlist entries must parse even when the rule is disabled, so a
        // toggle flip never surfaces a latent config error.
        IpAllowlist::from_entries(&self.proxy.allowlist)?;

        Ok(())
    }
}
