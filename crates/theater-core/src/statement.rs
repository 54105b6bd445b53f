//! # Statement Assembler
//!
//! Turns an [`Invoice`] plus [`Catalog`] into [`StatementData`], the
//! structured form every renderer consumes.
//!
//! ## Build Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each performance, in invoice order:                                │
//! │                                                                         │
//! │    catalog.lookup(play_id) ──► amount_for(type) ──► volume_credits_for  │
//! │          │                          │                                   │
//! │          └── UnknownPlay ───────────┴── UnknownPlayType                 │
//! │                         │                                               │
//! │                         ▼                                               │
//! │               abort, nothing returned                                   │
//! │                                                                         │
//! │  totals: amount = Σ line amounts, credits = Σ credits (own pass)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::credits::volume_credits_for;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::amount_for;
use crate::rules::PricingRules;
use crate::types::{Invoice, PlayType};

// =============================================================================
// Performance Line
// =============================================================================

/// One priced performance, as it appears on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceLine {
    pub play_name: String,
    pub play_type: PlayType,
    pub audience: u32,
    /// Amount owed, in cents.
    pub amount: Money,
    pub volume_credits: u64,
}

// =============================================================================
// Statement Data
// =============================================================================

/// Everything a renderer needs for one statement.
///
/// Only [`build`] constructs it, so the totals always agree with the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    customer: String,
    lines: Vec<PerformanceLine>,
    total_amount: Money,
    total_volume_credits: u64,
}

impl StatementData {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Priced performances, in invoice order.
    pub fn lines(&self) -> &[PerformanceLine] {
        &self.lines
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

/// Builds the statement data for an invoice.
///
/// Fails on the first performance whose play is missing from the catalog
/// or whose type has no pricing formula; no partial data is returned.
/// The rules are validated first, so negative or oversized constants are
/// rejected before any performance is priced.
///
/// ## Example
/// ```rust
/// use theater_core::{build, Catalog, Invoice, Performance, Play, PlayType, PricingRules};
///
/// let catalog: Catalog = [("othello", Play::new("Othello", PlayType::Tragedy))]
///     .into_iter()
///     .collect();
/// let invoice = Invoice::new("BigCo", vec![Performance::new("othello", 40)]);
///
/// let data = build(&invoice, &catalog, &PricingRules::default()).unwrap();
/// assert_eq!(data.total_amount().cents(), 50_000);
/// assert_eq!(data.total_volume_credits(), 10);
/// ```
pub fn build(invoice: &Invoice, catalog: &Catalog, rules: &PricingRules) -> CoreResult<StatementData> {
    rules.validate()?;

    let mut lines = Vec::with_capacity(invoice.performances.len());

    for performance in &invoice.performances {
        let play = catalog.lookup(&performance.play_id)?;
        let amount = amount_for(&play.play_type, performance.audience, rules)?;
        let volume_credits = volume_credits_for(&play.play_type, performance.audience, rules);

        lines.push(PerformanceLine {
            play_name: play.name.clone(),
            play_type: play.play_type.clone(),
            audience: performance.audience,
            amount,
            volume_credits,
        });
    }

    let total_amount = lines
        .iter()
        .try_fold(Money::zero(), |total, line| total.checked_add(line.amount))
        .ok_or(CoreError::AmountOverflow)?;
    let total_volume_credits = total_volume_credits(invoice, catalog, rules)?;

    Ok(StatementData {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_volume_credits,
    })
}

/// Sums credits straight from the invoice rather than from the built lines.
fn total_volume_credits(invoice: &Invoice, catalog: &Catalog, rules: &PricingRules) -> CoreResult<u64> {
    invoice.performances.iter().try_fold(0u64, |total, performance| {
        let play = catalog.lookup(&performance.play_id)?;
        Ok(total + volume_credits_for(&play.play_type, performance.audience, rules))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{Performance, Play};
    use crate::validation::MAX_RULE_AMOUNT_CENTS;

    fn catalog() -> Catalog {
        [
            ("hamlet", Play::new("Hamlet", PlayType::Tragedy)),
            ("as-like", Play::new("As You Like It", PlayType::Comedy)),
            ("othello", Play::new("Othello", PlayType::Tragedy)),
            ("henry-v", Play::new("Henry V", "history")),
        ]
        .into_iter()
        .collect()
    }

    fn bigco() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    #[test]
    fn test_build_bigco() {
        let data = build(&bigco(), &catalog(), &PricingRules::default()).unwrap();

        assert_eq!(data.customer(), "BigCo");
        let amounts: Vec<i64> = data.lines().iter().map(|l| l.amount.cents()).collect();
        assert_eq!(amounts, vec![65_000, 58_000, 50_000]);
        let names: Vec<&str> = data.lines().iter().map(|l| l.play_name.as_str()).collect();
        assert_eq!(names, vec!["Hamlet", "As You Like It", "Othello"]);

        assert_eq!(data.total_amount().cents(), 173_000);
        assert_eq!(data.total_volume_credits(), 47);
    }

    #[test]
    fn test_totals_match_lines() {
        let data = build(&bigco(), &catalog(), &PricingRules::default()).unwrap();

        let line_amounts = data
            .lines()
            .iter()
            .fold(Money::zero(), |total, l| total + l.amount);
        let line_credits: u64 = data.lines().iter().map(|l| l.volume_credits).sum();
        assert_eq!(data.total_amount(), line_amounts);
        assert_eq!(data.total_volume_credits(), line_credits);
    }

    #[test]
    fn test_empty_invoice() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let data = build(&invoice, &catalog(), &PricingRules::default()).unwrap();

        assert!(data.lines().is_empty());
        assert!(data.total_amount().is_zero());
        assert_eq!(data.total_volume_credits(), 0);
    }

    #[test]
    fn test_unknown_play_aborts_wherever_it_appears() {
        for position in 0..=3 {
            let mut invoice = bigco();
            invoice
                .performances
                .insert(position, Performance::new("macbeth", 10));

            let err = build(&invoice, &catalog(), &PricingRules::default()).unwrap_err();
            assert_eq!(
                err,
                CoreError::UnknownPlay {
                    play_id: "macbeth".to_string()
                }
            );
        }
    }

    #[test]
    fn test_unknown_play_type_aborts() {
        let mut invoice = bigco();
        invoice.performances.push(Performance::new("henry-v", 53));

        let err = build(&invoice, &catalog(), &PricingRules::default()).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownPlayType {
                play_type: "history".to_string()
            }
        );
    }

    #[test]
    fn test_first_failure_in_invoice_order_wins() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("henry-v", 53),
                Performance::new("macbeth", 10),
            ],
        );

        let err = build(&invoice, &catalog(), &PricingRules::default()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownPlayType { .. }));
    }

    #[test]
    fn test_negative_rules_are_rejected() {
        let rules = PricingRules {
            tragedy_base_amount: Money::from_cents(-40_000),
            ..PricingRules::default()
        };

        let err = build(&bigco(), &catalog(), &rules).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Negative {
                field: "tragedy_base_amount".to_string()
            })
        );
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let max = Money::from_cents(MAX_RULE_AMOUNT_CENTS);
        let rules = PricingRules {
            comedy_base_amount: max,
            comedy_audience_threshold: 0,
            comedy_over_threshold_bonus: max,
            comedy_per_extra_attendee: max,
            comedy_per_attendee: max,
            ..PricingRules::default()
        };
        let one = Invoice::new("BigCo", vec![Performance::new("as-like", u32::MAX)]);
        assert!(build(&one, &catalog(), &rules).is_ok());

        let two = Invoice::new(
            "BigCo",
            vec![
                Performance::new("as-like", u32::MAX),
                Performance::new("as-like", u32::MAX),
            ],
        );
        assert_eq!(
            build(&two, &catalog(), &rules).unwrap_err(),
            CoreError::AmountOverflow
        );
    }

    #[test]
    fn test_serializes_for_other_renderers() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("as-like", 25)]);
        let data = build(&invoice, &catalog(), &PricingRules::default()).unwrap();

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["customer"], "BigCo");
        assert_eq!(json["lines"][0]["play_type"], "comedy");
        assert_eq!(json["lines"][0]["amount"], 50_000);
        assert_eq!(json["total_volume_credits"], 5);
    }
}
