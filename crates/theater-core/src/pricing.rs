//! # Pricing Engine
//!
//! Prices one performance from its play type and audience size.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TRAGEDY                                                                │
//! │    base                                                                 │
//! │    + (audience - threshold) × per_extra      if audience > threshold    │
//! │                                                                         │
//! │  COMEDY                                                                 │
//! │    base                                                                 │
//! │    + bonus + (audience - threshold) × extra  if audience > threshold    │
//! │    + audience × per_attendee                 always                     │
//! │                                                                         │
//! │  ANYTHING ELSE → UnknownPlayType (statement aborts)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Integer cents throughout; no rounding happens here. Arithmetic is
//! checked, so rules too large for `Money` fail with `AmountOverflow`.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::PricingRules;
use crate::types::PlayType;

/// Computes the amount owed for one performance.
///
/// ## Example
/// ```rust
/// use theater_core::{pricing::amount_for, PlayType, PricingRules};
///
/// let rules = PricingRules::default();
/// let amount = amount_for(&PlayType::Tragedy, 35, &rules).unwrap();
/// assert_eq!(amount.cents(), 45_000);
/// ```
pub fn amount_for(play_type: &PlayType, audience: u32, rules: &PricingRules) -> CoreResult<Money> {
    let overflow = || CoreError::AmountOverflow;

    match play_type {
        PlayType::Tragedy => {
            let mut amount = rules.tragedy_base_amount;
            if audience > rules.tragedy_audience_threshold {
                let extra = rules
                    .tragedy_per_extra_attendee
                    .checked_mul(audience - rules.tragedy_audience_threshold)
                    .ok_or_else(overflow)?;
                amount = amount.checked_add(extra).ok_or_else(overflow)?;
            }
            Ok(amount)
        }
        PlayType::Comedy => {
            let mut amount = rules.comedy_base_amount;
            if audience > rules.comedy_audience_threshold {
                let extra = rules
                    .comedy_per_extra_attendee
                    .checked_mul(audience - rules.comedy_audience_threshold)
                    .and_then(|extra| extra.checked_add(rules.comedy_over_threshold_bonus))
                    .ok_or_else(overflow)?;
                amount = amount.checked_add(extra).ok_or_else(overflow)?;
            }
            let per_attendee = rules
                .comedy_per_attendee
                .checked_mul(audience)
                .ok_or_else(overflow)?;
            amount = amount.checked_add(per_attendee).ok_or_else(overflow)?;
            Ok(amount)
        }
        PlayType::Unrecognized(name) => Err(CoreError::UnknownPlayType {
            play_type: name.clone(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(play_type: PlayType, audience: u32) -> i64 {
        amount_for(&play_type, audience, &PricingRules::default())
            .unwrap()
            .cents()
    }

    #[test]
    fn test_tragedy_at_or_below_threshold() {
        assert_eq!(cents(PlayType::Tragedy, 0), 40_000);
        assert_eq!(cents(PlayType::Tragedy, 30), 40_000);
    }

    #[test]
    fn test_tragedy_over_threshold() {
        assert_eq!(cents(PlayType::Tragedy, 31), 41_000);
        assert_eq!(cents(PlayType::Tragedy, 35), 45_000);
        assert_eq!(cents(PlayType::Tragedy, 55), 65_000);
    }

    #[test]
    fn test_comedy_below_threshold_still_pays_per_attendee() {
        // 30000 + 10 × 300
        assert_eq!(cents(PlayType::Comedy, 10), 33_000);
        assert_eq!(cents(PlayType::Comedy, 0), 30_000);
        // 30000 + 20 × 300, threshold is exclusive
        assert_eq!(cents(PlayType::Comedy, 20), 36_000);
    }

    #[test]
    fn test_comedy_over_threshold() {
        // 30000 + 10000 + 5 × 500 + 25 × 300
        assert_eq!(cents(PlayType::Comedy, 25), 50_000);
        assert_eq!(cents(PlayType::Comedy, 35), 58_000);
    }

    #[test]
    fn test_unknown_type_fails_with_its_name() {
        let err = amount_for(
            &PlayType::Unrecognized("history".to_string()),
            40,
            &PricingRules::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownPlayType {
                play_type: "history".to_string()
            }
        );
    }

    #[test]
    fn test_custom_rules_are_used() {
        let rules = PricingRules {
            tragedy_base_amount: Money::from_cents(1_000),
            tragedy_audience_threshold: 2,
            tragedy_per_extra_attendee: Money::from_cents(7),
            ..PricingRules::default()
        };
        let amount = amount_for(&PlayType::Tragedy, 5, &rules).unwrap();
        assert_eq!(amount.cents(), 1_021);
    }

    #[test]
    fn test_unbounded_rule_overflows_without_panicking() {
        let rules = PricingRules {
            tragedy_per_extra_attendee: Money::from_cents(i64::MAX),
            ..PricingRules::default()
        };
        assert_eq!(
            amount_for(&PlayType::Tragedy, 35, &rules),
            Err(CoreError::AmountOverflow)
        );
    }

    #[test]
    fn test_largest_valid_rules_fit_for_any_audience() {
        let max = Money::from_cents(crate::validation::MAX_RULE_AMOUNT_CENTS);
        let rules = PricingRules {
            tragedy_base_amount: max,
            tragedy_audience_threshold: 0,
            tragedy_per_extra_attendee: max,
            comedy_base_amount: max,
            comedy_audience_threshold: 0,
            comedy_over_threshold_bonus: max,
            comedy_per_extra_attendee: max,
            comedy_per_attendee: max,
            ..PricingRules::default()
        };
        assert!(rules.validate().is_ok());
        assert!(amount_for(&PlayType::Tragedy, u32::MAX, &rules).is_ok());
        assert!(amount_for(&PlayType::Comedy, u32::MAX, &rules).is_ok());
    }

    #[test]
    fn test_amount_is_never_negative() {
        for audience in [0, 1, 19, 20, 21, 29, 30, 31, 100, 10_000] {
            assert!(cents(PlayType::Tragedy, audience) >= 0);
            assert!(cents(PlayType::Comedy, audience) >= 0);
        }
    }
}
