use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;

/// Header names mapped to their raw values for a single inbound request.
///
/// Names are matched case-sensitively, exactly as the host supplies them.
/// The map is read-only input; the evaluators never mutate it.
pub type HeaderMap = HashMap<String, String>;

/// A single checkout submission as seen by the guard.
///
/// Constructed per request and discarded once the decision is produced.
#[derive(Debug, Clone)]
pub struct CheckoutSubmission {
    /// Billing phone number exactly as the customer typed it
    pub phone: String,

    /// Client IP as resolved by the host, if it resolved one
    pub client_ip: Option<IpAddr>,

    /// Request headers
    pub headers: HeaderMap,
}

impl CheckoutSubmission {
    pub fn new(phone: impl Into<String>, client_ip: Option<IpAddr>, headers: HeaderMap) -> Self {
        Self {
            phone: phone.into(),
            client_ip,
            headers,
        }
    }
}

/// Which rule rejected a submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Billing phone is not a valid Bangladeshi mobile number
    InvalidPhone,

    /// Request headers indicate a proxy or VPN
    ProxySuspected,
}

/// Outcome of evaluating a checkout submission.
///
/// A rejection carries the configured, host-localizable message for the rule
/// that fired. Persisting blocked-attempt counters is the host's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutDecision {
    /// Submission passed every enabled rule
    Allow,

    /// Submission failed a rule and must be rejected
    Reject {
        reason: RejectReason,
        message: String,
    },
}

impl CheckoutDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CheckoutDecision::Allow)
    }

    /// Reason for rejection, if the submission was rejected
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            CheckoutDecision::Allow => None,
            CheckoutDecision::Reject { reason, .. } => Some(*reason),
        }
    }
}
