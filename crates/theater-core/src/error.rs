//! # Error Types
//!
//! Domain-specific error types for theater-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  theater-core errors (this file)                                       │
//! │  ├── CoreError        - Statement build failures                       │
//! │  └── ValidationError  - Catalog / rules input failures                 │
//! │                                                                         │
//! │  statement-cli errors (app crate)                                      │
//! │  └── AppError         - Config loading + wrapped CoreError             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Build errors are data errors: the invoice, catalog or rules must be
//! fixed upstream. Nothing here is retried.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building a statement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A performance references a play identifier absent from the catalog.
    #[error("unknown play: {play_id}")]
    UnknownPlay { play_id: String },

    /// A resolved play has a type the pricing rules do not recognize.
    ///
    /// ## When This Occurs
    /// ```text
    /// Catalog: "henry-v" → { name: "Henry V", type: "history" }
    ///      │
    ///      ▼
    /// amount(history, 53) ← no formula
    ///      │
    ///      ▼
    /// UnknownPlayType { play_type: "history" }  (whole statement aborts)
    /// ```
    #[error("unknown type: {play_type}")]
    UnknownPlayType { play_type: String },

    /// An amount or total does not fit in `Money`.
    #[error("amount overflow")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog entries and pricing rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value exceeds its upper bound.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
