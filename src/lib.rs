//! Guardify — checkout fraud and abuse mitigation rules for Bangladeshi
//! e-commerce storefronts.
//!
//! Two stateless rule evaluators make up the core:
//!
//! - [`validation::is_valid_bd_mobile`] classifies a free-form string as a
//!   valid Bangladeshi mobile number.
//! - [`detection::ProxyHeuristic`] classifies an inbound request's headers
//!   as proxy/VPN-suspected, with a trust allowlist of CDN/edge markers and
//!   a configurable IP/CIDR bypass list.
//!
//! [`guard::CheckoutGuard`] composes both behind a single
//! `evaluate(submission) -> decision` call for the host checkout pipeline.
//! Both evaluators are total functions over their inputs and never perform
//! I/O, so they are safe to call concurrently without synchronization.

pub mod config;
pub mod detection;
pub mod error;
pub mod guard;
pub mod types;
pub mod validation;

pub use config::GuardConfig;
pub use detection::{IpAllowlist, ProxyHeuristic};
pub use error::{GuardError, Result};
pub use guard::CheckoutGuard;
pub use types::{CheckoutDecision, CheckoutSubmission, HeaderMap, RejectReason};
pub use validation::is_valid_bd_mobile;
