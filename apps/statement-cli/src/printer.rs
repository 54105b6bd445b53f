//! # Statement Printer
//!
//! Wraps the pure theater-core pipeline with logging. Holds only the pricing
//! rules, so one printer can serve any number of independent statements.

use tracing::{debug, info, warn};

use theater_core::{render_plain_text, Catalog, Invoice, PricingRules, StatementData};

use crate::error::AppResult;

/// Builds and renders statements under a fixed set of pricing rules.
#[derive(Debug, Clone, Default)]
pub struct StatementPrinter {
    rules: PricingRules,
}

impl StatementPrinter {
    /// Creates a printer for the given rules.
    pub fn new(rules: PricingRules) -> Self {
        StatementPrinter { rules }
    }

    /// Builds the structured statement data for an invoice.
    pub fn build(&self, invoice: &Invoice, catalog: &Catalog) -> AppResult<StatementData> {
        debug!(
            customer = %invoice.customer,
            performances = invoice.performances.len(),
            plays = catalog.len(),
            "Building statement"
        );

        match theater_core::build(invoice, catalog, &self.rules) {
            Ok(data) => {
                info!(
                    customer = %data.customer(),
                    total = %data.total_amount(),
                    credits = data.total_volume_credits(),
                    "Statement built"
                );
                Ok(data)
            }
            Err(e) => {
                warn!(customer = %invoice.customer, error = %e, "Statement build failed");
                Err(e.into())
            }
        }
    }

    /// Builds and renders the plain-text statement for an invoice.
    pub fn print(&self, invoice: &Invoice, catalog: &Catalog) -> AppResult<String> {
        let data = self.build(invoice, catalog)?;
        Ok(render_plain_text(&data))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::sample::{bigco_invoice, shakespeare_catalog};
    use theater_core::{CoreError, Money, Performance, LINE_SEPARATOR};

    #[test]
    fn test_print_sample() {
        let printer = StatementPrinter::default();
        let text = printer.print(&bigco_invoice(), &shakespeare_catalog()).unwrap();

        let lines: Vec<&str> = text.split(LINE_SEPARATOR).collect();
        assert_eq!(
            lines,
            vec![
                "Statement for BigCo",
                "  Hamlet: $650.00 (55 seats)",
                "  As You Like It: $580.00 (35 seats)",
                "  Othello: $500.00 (40 seats)",
                "Amount owed is $1,730.00",
                "You earned 47 credits",
                "",
            ]
        );
    }

    #[test]
    fn test_printer_uses_its_rules() {
        let rules = PricingRules {
            comedy_per_attendee: Money::from_cents(0),
            ..PricingRules::default()
        };
        let printer = StatementPrinter::new(rules);
        let data = printer.build(&bigco_invoice(), &shakespeare_catalog()).unwrap();

        // As You Like It loses 35 × 300
        assert_eq!(data.total_amount().cents(), 173_000 - 10_500);
    }

    #[test]
    fn test_unknown_play_surfaces_core_error() {
        let mut invoice = bigco_invoice();
        invoice.performances.push(Performance::new("macbeth", 12));

        let err = StatementPrinter::default()
            .print(&invoice, &shakespeare_catalog())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Statement(CoreError::UnknownPlay { ref play_id }) if play_id == "macbeth"
        ));
        assert_eq!(err.to_string(), "unknown play: macbeth");
    }
}
