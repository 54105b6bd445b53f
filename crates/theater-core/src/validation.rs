//! # Validation Module
//!
//! Input checks for catalog entries, customers and pricing rules.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::insert ──► validate_play_id + validate_play_name             │
//! │  PricingRules::validate / build ──► validate_pricing_rules             │
//! │  validate_customer ──► offered to callers, never applied by build      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Statement building re-checks the rules before pricing anything, so
//! hand-built rules get the same bounds as configured ones.
//!
//! ## Usage
//! ```rust
//! use theater_core::validation::{validate_play_id, validate_play_name};
//!
//! assert!(validate_play_id("hamlet").is_ok());
//! assert!(validate_play_name("").is_err());
//! ```

use crate::error::ValidationError;
use crate::rules::PricingRules;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted catalog identifier.
pub const MAX_PLAY_ID_LEN: usize = 64;

/// Longest accepted play or customer name.
pub const MAX_NAME_LEN: usize = 200;

/// Largest accepted monetary rule, in cents ($10,000,000.00).
///
/// At this bound a single performance priced with `u32::MAX` attendees still
/// fits in an `i64` of cents.
pub const MAX_RULE_AMOUNT_CENTS: i64 = 1_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog identifier.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 64 characters
pub fn validate_play_id(play_id: &str) -> ValidationResult<()> {
    validate_text("play_id", play_id, MAX_PLAY_ID_LEN)
}

/// Validates a play's display name.
pub fn validate_play_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a customer name.
///
/// ## Example
/// ```rust
/// use theater_core::validation::validate_customer;
///
/// assert!(validate_customer("BigCo").is_ok());
/// assert!(validate_customer("   ").is_err());
/// ```
pub fn validate_customer(customer: &str) -> ValidationResult<()> {
    validate_text("customer", customer, MAX_NAME_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Rule Validators
// =============================================================================

/// Validates pricing rules loaded from configuration.
///
/// ## Rules
/// - Every monetary value is between zero and `MAX_RULE_AMOUNT_CENTS`
/// - `comedy_credit_divisor` is at least 1 (it is a divisor)
pub fn validate_pricing_rules(rules: &PricingRules) -> ValidationResult<()> {
    let monetary = [
        ("tragedy_base_amount", rules.tragedy_base_amount),
        ("tragedy_per_extra_attendee", rules.tragedy_per_extra_attendee),
        ("comedy_base_amount", rules.comedy_base_amount),
        ("comedy_over_threshold_bonus", rules.comedy_over_threshold_bonus),
        ("comedy_per_extra_attendee", rules.comedy_per_extra_attendee),
        ("comedy_per_attendee", rules.comedy_per_attendee),
    ];

    for (field, value) in monetary {
        if value.is_negative() {
            return Err(ValidationError::Negative {
                field: field.to_string(),
            });
        }

        if value.cents() > MAX_RULE_AMOUNT_CENTS {
            return Err(ValidationError::TooLarge {
                field: field.to_string(),
                max: MAX_RULE_AMOUNT_CENTS,
            });
        }
    }

    if rules.comedy_credit_divisor == 0 {
        return Err(ValidationError::MustBePositive {
            field: "comedy_credit_divisor".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
