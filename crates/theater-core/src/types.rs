//! # Domain Types
//!
//! Input records for a statement: what was staged, for whom, to how many.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Invoice      │   │   Performance   │   │      Play       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer       │──►│  play_id ───────┼──►│  name           │       │
//! │  │  performances[] │   │  audience       │   │  play_type      │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │                 │
//! │                                              ┌────────▼────────┐       │
//! │                                              │    PlayType     │       │
//! │                                              │  Tragedy        │       │
//! │                                              │  Comedy         │       │
//! │                                              │  Unrecognized   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are immutable inputs; the assembler only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Play Type
// =============================================================================

/// The pricing/credit category of a play.
///
/// Catalog data arrives as free-form strings, so a type outside the known
/// set is kept as [`PlayType::Unrecognized`] rather than rejected on
/// construction. The pricing engine is the one place that refuses it,
/// which makes the failure surface in invoice order.
///
/// ## Example
/// ```rust
/// use theater_core::PlayType;
///
/// assert_eq!(PlayType::parse("comedy"), PlayType::Comedy);
/// assert_eq!(
///     PlayType::parse("pastoral"),
///     PlayType::Unrecognized("pastoral".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    Tragedy,
    Comedy,
    /// Any type name the rules have no formula for.
    Unrecognized(String),
}

impl PlayType {
    /// Maps a type name onto a variant. Matching is exact (lowercase).
    pub fn parse(name: &str) -> Self {
        PlayType::from(name.to_string())
    }

    /// Returns the type name as it appears in catalog data.
    pub fn as_str(&self) -> &str {
        match self {
            PlayType::Tragedy => "tragedy",
            PlayType::Comedy => "comedy",
            PlayType::Unrecognized(name) => name.as_str(),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PlayType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "tragedy" => PlayType::Tragedy,
            "comedy" => PlayType::Comedy,
            _ => PlayType::Unrecognized(name),
        }
    }
}

impl From<&str> for PlayType {
    fn from(name: &str) -> Self {
        PlayType::parse(name)
    }
}

impl From<PlayType> for String {
    fn from(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

// =============================================================================
// Play
// =============================================================================

/// A catalog entry: display name plus pricing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Name printed on the statement line.
    pub name: String,

    /// Pricing/credit category.
    #[serde(rename = "type")]
    pub play_type: PlayType,
}

impl Play {
    /// Creates a play record.
    pub fn new(name: impl Into<String>, play_type: impl Into<PlayType>) -> Self {
        Play {
            name: name.into(),
            play_type: play_type.into(),
        }
    }
}

// =============================================================================
// Performance
// =============================================================================

/// One staging of a play, billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Catalog key of the staged play.
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Number of attendees.
    pub audience: u32,
}

impl Performance {
    /// Creates a performance record.
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer's billed performances, in billing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name printed in the statement header.
    pub customer: String,

    /// Performances in the order they appear on the statement.
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates an invoice.
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_type_parse() {
        assert_eq!(PlayType::parse("tragedy"), PlayType::Tragedy);
        assert_eq!(PlayType::parse("comedy"), PlayType::Comedy);
        assert_eq!(
            PlayType::parse("Comedy"),
            PlayType::Unrecognized("Comedy".to_string())
        );
        assert_eq!(
            PlayType::parse("history"),
            PlayType::Unrecognized("history".to_string())
        );
    }

    #[test]
    fn test_play_type_display_keeps_type_name() {
        assert_eq!(PlayType::Comedy.to_string(), "comedy");
        assert_eq!(PlayType::parse("history").to_string(), "history");
    }

    #[test]
    fn test_play_serde_uses_type_name() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play, Play::new("Hamlet", PlayType::Tragedy));

        let play: Play = serde_json::from_str(r#"{"name":"Henry V","type":"history"}"#).unwrap();
        assert_eq!(play.play_type, PlayType::Unrecognized("history".to_string()));

        let json = serde_json::to_string(&Play::new("As You Like It", "comedy")).unwrap();
        assert_eq!(json, r#"{"name":"As You Like It","type":"comedy"}"#);
    }

    #[test]
    fn test_performance_serde_field_names() {
        let perf: Performance = serde_json::from_str(r#"{"playID":"hamlet","audience":55}"#).unwrap();
        assert_eq!(perf, Performance::new("hamlet", 55));
    }
}
