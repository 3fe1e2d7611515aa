use tracing::{debug, info};

use crate::config::GuardConfig;
use crate::detection::{IpAllowlist, ProxyHeuristic};
use crate::error::Result;
use crate::types::{CheckoutDecision, CheckoutSubmission, RejectReason};
use crate::validation::is_valid_bd_mobile;

/// Composition layer the host checkout pipeline calls.
///
/// Built once from config and shared by reference across request handlers.
/// Evaluation is synchronous and side-effect free; acting on a rejection
/// (error display, blocked-attempt counters) is the host's concern.
pub struct CheckoutGuard {
    config: GuardConfig,
    heuristic: ProxyHeuristic,
}

impl CheckoutGuard {
    /// Create a guard from config. Fails if the config does not validate
    /// or an allowlist entry does not parse.
    pub fn new(config: GuardConfig) -> Result<Self> {
        config.validate()?;

        let allowlist = IpAllowlist::from_entries(&config.proxy.allowlist)?;
        let heuristic = ProxyHeuristic::new(
            config.proxy.trusted_headers.clone(),
            config.proxy.proxy_headers.clone(),
            allowlist,
        );

        info!(
            "Checkout guard initialized: phone rule {}, proxy rule {}, {} allowlist entries",
            if config.phone.enabled { "on" } else { "off" },
            if config.proxy.enabled { "on" } else { "off" },
            heuristic.allowlist().len()
        );

        Ok(Self { config, heuristic })
    }

    /// Evaluate a checkout submission against every enabled rule.
    ///
    /// Rules run in a fixed order (phone, then proxy); the first failure
    /// rejects with that rule's configured message.
    pub fn evaluate(&self, submission: &CheckoutSubmission) -> CheckoutDecision {
        if self.config.phone.enabled && !is_valid_bd_mobile(&submission.phone) {
            debug!("Checkout rejected: invalid billing phone");
            return CheckoutDecision::Reject {
                reason: RejectReason::InvalidPhone,
                message: self.config.phone.rejection_message.clone(),
            };
        }

        if self.config.proxy.enabled
            && self
                .heuristic
                .check(submission.client_ip, &submission.headers)
        {
            debug!(
                "Checkout rejected: proxy/VPN suspected for client {:?}",
                submission.client_ip
            );
            return CheckoutDecision::Reject {
                reason: RejectReason::ProxySuspected,
                message: self.config.proxy.rejection_message.clone(),
            };
        }

        CheckoutDecision::Allow
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}
