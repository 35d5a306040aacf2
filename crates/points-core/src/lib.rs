//! # points-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points service. It validates
//! submitted receipts and scores them, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (Axum)                            │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Receipt + LogSink                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  8 checks │  │  7 rules  │  │   │
//! │  │   │   Item    │  │  parsing  │  │  in order │  │  summed   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Receipt validation
//! - [`scoring`] - Points rules
//! - [`log`] - Logging sink with explicit request correlation
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score_receipt, validate_receipt, Item, NullSink, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: Some(vec![Item::new("Gatorade", "2.25"); 4]),
//!     total: "9.00".to_string(),
//! };
//!
//! validate_receipt(&receipt, &NullSink).unwrap();
//! assert_eq!(score_receipt(&receipt, &NullSink), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod log;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyParseError, ValidationError};
pub use log::{LogLevel, LogSink, NullSink, RequestId, TracingSink};
pub use money::Money;
pub use scoring::score_receipt;
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum difference, in cents, tolerated between the declared total and
/// the sum of item prices.
pub const TOTAL_TOLERANCE_CENTS: i64 = 1;
