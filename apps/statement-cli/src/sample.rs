//! Built-in sample data: the BigCo invoice against three Shakespeare plays.

use theater_core::{Catalog, Invoice, Performance, Play, PlayType};

/// Hamlet, As You Like It and Othello.
pub fn shakespeare_catalog() -> Catalog {
    [
        ("hamlet", Play::new("Hamlet", PlayType::Tragedy)),
        ("as-like", Play::new("As You Like It", PlayType::Comedy)),
        ("othello", Play::new("Othello", PlayType::Tragedy)),
    ]
    .into_iter()
    .collect()
}

/// BigCo's invoice; bills $1,730.00 and earns 47 credits under default rules.
pub fn bigco_invoice() -> Invoice {
    Invoice::new(
        "BigCo",
        vec![
            Performance::new("hamlet", 55),
            Performance::new("as-like", 35),
            Performance::new("othello", 40),
        ],
    )
}
