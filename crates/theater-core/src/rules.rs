//! # Pricing Rules
//!
//! Every constant the pricing and volume-credit engines use, gathered in one
//! immutable value. Built once at startup (defaults or configuration) and
//! passed by reference; nothing reads a global.
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! tragedy_base_amount = 40000        # cents
//! tragedy_audience_threshold = 30
//! tragedy_per_extra_attendee = 1000  # cents
//! comedy_base_amount = 30000
//! comedy_audience_threshold = 20
//! comedy_over_threshold_bonus = 10000
//! comedy_per_extra_attendee = 500
//! comedy_per_attendee = 300
//! base_credit_threshold = 30
//! comedy_credit_divisor = 5
//! ```
//!
//! Missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{validate_pricing_rules, ValidationResult};

/// Pricing and volume-credit constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Flat price of any tragedy.
    pub tragedy_base_amount: Money,

    /// Audience size included in the tragedy base price.
    pub tragedy_audience_threshold: u32,

    /// Charged per attendee above the tragedy threshold.
    pub tragedy_per_extra_attendee: Money,

    /// Flat price of any comedy.
    pub comedy_base_amount: Money,

    /// Audience size included in the comedy base price.
    pub comedy_audience_threshold: u32,

    /// One-off charge once a comedy passes its threshold.
    pub comedy_over_threshold_bonus: Money,

    /// Charged per attendee above the comedy threshold.
    pub comedy_per_extra_attendee: Money,

    /// Charged per attendee of every comedy, threshold or not.
    pub comedy_per_attendee: Money,

    /// Attendees above this count earn one credit each.
    pub base_credit_threshold: u32,

    /// One bonus credit per this many comedy attendees.
    pub comedy_credit_divisor: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            tragedy_base_amount: Money::from_cents(40_000),
            tragedy_audience_threshold: 30,
            tragedy_per_extra_attendee: Money::from_cents(1_000),
            comedy_base_amount: Money::from_cents(30_000),
            comedy_audience_threshold: 20,
            comedy_over_threshold_bonus: Money::from_cents(10_000),
            comedy_per_extra_attendee: Money::from_cents(500),
            comedy_per_attendee: Money::from_cents(300),
            base_credit_threshold: 30,
            comedy_credit_divisor: 5,
        }
    }
}

impl PricingRules {
    /// Checks the rules are usable (no negative prices, non-zero divisor).
    pub fn validate(&self) -> ValidationResult<()> {
        validate_pricing_rules(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
