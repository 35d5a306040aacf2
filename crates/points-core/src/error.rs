//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ValidationError  - Receipt rejected (8 kinds, stable messages)    │
//! │  └── MoneyParseError  - Amount string could not be read               │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → 400 Bad Request                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are stable: clients and tests assert on them
//! 3. Every variant has a machine-readable code as well

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures.
///
/// Variants are listed in the order the validator checks them; the first
/// failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("invalid receipt: {field} is required")]
    MissingField { field: String },

    /// The receipt has no line items.
    #[error("no items - at least one item is required")]
    NoItems,

    /// Retailer contains characters outside letters, digits, whitespace, `-`, `&`.
    #[error("invalid retailer")]
    InvalidRetailer,

    /// Purchase date is not a real "YYYY-MM-DD" date.
    #[error("invalid purchase date")]
    InvalidPurchaseDate,

    /// Purchase time is not a real "HH:MM" 24-hour time.
    #[error("invalid purchase time")]
    InvalidPurchaseTime,

    /// Total is not a two-decimal amount.
    #[error("invalid total")]
    InvalidTotal,

    /// An item price is not a two-decimal amount.
    #[error("invalid item price")]
    InvalidItemPrice,

    /// Item prices do not add up to the declared total.
    #[error("total mismatch with items total")]
    TotalMismatch,
}

impl ValidationError {
    /// Machine-readable code for this kind of failure.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::NoItems => "empty_items",
            ValidationError::InvalidRetailer => "invalid_retailer",
            ValidationError::InvalidPurchaseDate => "invalid_purchase_date",
            ValidationError::InvalidPurchaseTime => "invalid_purchase_time",
            ValidationError::InvalidTotal => "invalid_total",
            ValidationError::InvalidItemPrice => "invalid_item_price",
            ValidationError::TotalMismatch => "total_mismatch",
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to read a decimal amount such as `"6.49"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount '{0}' is not a plain decimal number")]
    Malformed(String),

    #[error("amount '{0}' has more than two fraction digits")]
    TooPrecise(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
