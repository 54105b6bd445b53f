//! # Volume-Credit Engine
//!
//! Loyalty credits earned by one performance:
//! `max(audience - base_threshold, 0)`, plus `audience / divisor` (floor)
//! for comedies. Other types get no bonus.

use crate::rules::PricingRules;
use crate::types::PlayType;

/// Computes the volume credits earned by one performance.
///
/// Never fails; an unrecognized type simply earns no comedy bonus. The
/// assembler prices each performance first, so such a type never gets here
/// during a statement build.
///
/// ## Example
/// ```rust
/// use theater_core::{credits::volume_credits_for, PlayType, PricingRules};
///
/// let rules = PricingRules::default();
/// assert_eq!(volume_credits_for(&PlayType::Tragedy, 35, &rules), 5);
/// assert_eq!(volume_credits_for(&PlayType::Comedy, 25, &rules), 5);
/// ```
pub fn volume_credits_for(play_type: &PlayType, audience: u32, rules: &PricingRules) -> u64 {
    let mut credits = u64::from(audience.saturating_sub(rules.base_credit_threshold));

    // extra credit for every `divisor` comedy attendees; a zero divisor
    // (rejected by PricingRules::validate) earns no bonus
    if *play_type == PlayType::Comedy {
        credits += u64::from(audience.checked_div(rules.comedy_credit_divisor).unwrap_or(0));
    }

    credits
}

// =============================================================================
// Unit Tests
// =============================================================================
