//! # theater-core: Pure Statement Logic
//!
//! Prices a customer's invoice of performances, totals the amount owed and
//! the volume credits earned, and renders the result as a text statement.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Invoice ──┐                                                           │
//! │             ├──► statement::build ──► StatementData ──► render ──► text │
//! │   Catalog ──┘         │                                                 │
//! │                       ├── catalog.lookup                                │
//! │   PricingRules ───────┼── pricing::amount_for                           │
//! │                       └── credits::volume_credits_for                   │
//! │                                                                         │
//! │   NO I/O • NO GLOBALS • PURE FUNCTIONS                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Invoice, Performance, Play, PlayType
//! - [`catalog`] - Play lookup by identifier
//! - [`rules`] - Pricing and credit constants
//! - [`pricing`] - Amount per performance
//! - [`credits`] - Volume credits per performance
//! - [`statement`] - StatementData assembly
//! - [`render`] - Plain-text statement
//! - [`money`] - Integer cents with US currency display
//! - [`validation`] - Catalog and rules checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use theater_core::{statement, Catalog, Invoice, Performance, Play, PlayType, PricingRules};
//!
//! let catalog: Catalog = [("hamlet", Play::new("Hamlet", PlayType::Tragedy))]
//!     .into_iter()
//!     .collect();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let text = statement(&invoice, &catalog, &PricingRules::default()).unwrap();
//! assert!(text.contains("  Hamlet: $650.00 (55 seats)"));
//! assert!(text.contains("You earned 25 credits"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod credits;
pub mod error;
pub mod money;
pub mod pricing;
pub mod render;
pub mod rules;
pub mod statement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use render::{render_plain_text, LINE_SEPARATOR};
pub use rules::PricingRules;
pub use statement::{build, PerformanceLine, StatementData};
pub use types::*;

/// Builds and renders the plain-text statement for an invoice.
///
/// Nothing is rendered if the build fails.
pub fn statement(invoice: &Invoice, catalog: &Catalog, rules: &PricingRules) -> CoreResult<String> {
    let data = build(invoice, catalog, rules)?;
    Ok(render_plain_text(&data))
}
