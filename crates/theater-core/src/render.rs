//! # Plain-Text Renderer
//!
//! ## Output Layout
//! ```text
//! Statement for BigCo
//!   Hamlet: $650.00 (55 seats)
//!   As You Like It: $580.00 (35 seats)
//!   Othello: $500.00 (40 seats)
//! Amount owed is $1,730.00
//! You earned 47 credits
//! ```
//!
//! Every line, the last included, ends with [`LINE_SEPARATOR`].

use crate::statement::StatementData;

/// The platform's newline convention.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// The platform's newline convention.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Renders statement data as a plain-text report.
pub fn render_plain_text(data: &StatementData) -> String {
    let mut out = format!("Statement for {}{}", data.customer(), LINE_SEPARATOR);

    for line in data.lines() {
        out.push_str(&format!(
            "  {}: {} ({} seats){}",
            line.play_name, line.amount, line.audience, LINE_SEPARATOR
        ));
    }

    out.push_str(&format!("Amount owed is {}{}", data.total_amount(), LINE_SEPARATOR));
    out.push_str(&format!(
        "You earned {} credits{}",
        data.total_volume_credits(),
        LINE_SEPARATOR
    ));

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
