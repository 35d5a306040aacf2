//! # Validation Module
//!
//! Decides whether a submitted receipt is acceptable.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation Pipeline                        │
//! │                                                                         │
//! │  1. required fields present ──────── MissingField { field }            │
//! │  2. at least one item ────────────── NoItems                           │
//! │  3. retailer characters ──────────── InvalidRetailer                   │
//! │  4. purchase date YYYY-MM-DD ─────── InvalidPurchaseDate               │
//! │  5. purchase time HH:MM ──────────── InvalidPurchaseTime               │
//! │  6. total is N.NN ────────────────── InvalidTotal                      │
//! │  7. every price is N.NN ──────────── InvalidItemPrice                  │
//! │  8. Σ prices ≈ total (±0.01) ─────── TotalMismatch                     │
//! │                                                                         │
//! │  First failure wins. No partial acceptance, no retries.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::{validate_receipt, Item, NullSink, Receipt, ValidationError};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: Some(vec![]),
//!     total: "0.00".to_string(),
//! };
//! assert_eq!(validate_receipt(&receipt, &NullSink), Err(ValidationError::NoItems));
//! ```

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::ValidationError;
use crate::log::LogSink;
use crate::money::Money;
use crate::types::Receipt;
use crate::TOTAL_TOLERANCE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

/// One or more ASCII digits, a point, exactly two ASCII digits.
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("invalid currency pattern"));

/// ASCII letters and digits, ASCII whitespace, hyphen, ampersand.
static RETAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9 \t\n\r\f\v&\-]+$").expect("invalid retailer pattern")
});

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("invalid date pattern"));

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("invalid time pattern"));

// =============================================================================
// Field Parsers
// =============================================================================

/// True when `amount` is a two-decimal currency string such as `"6.49"`.
pub fn is_currency(amount: &str) -> bool {
    CURRENCY.is_match(amount)
}

/// True when `retailer` uses only the allowed character set.
pub fn is_valid_retailer(retailer: &str) -> bool {
    RETAILER.is_match(retailer)
}

/// Parses a strict `"YYYY-MM-DD"` calendar date.
///
/// ## Example
/// ```rust
/// use points_core::validation::parse_purchase_date;
///
/// assert!(parse_purchase_date("2022-01-01").is_some());
/// assert!(parse_purchase_date("2022-02-30").is_none());
/// assert!(parse_purchase_date("2022-1-01").is_none());
/// ```
pub fn parse_purchase_date(date: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Parses a strict `"HH:MM"` 24-hour time.
///
/// ## Example
/// ```rust
/// use points_core::validation::parse_purchase_time;
///
/// assert!(parse_purchase_time("13:01").is_some());
/// assert!(parse_purchase_time("24:00").is_none());
/// assert!(parse_purchase_time("1:05").is_none());
/// ```
pub fn parse_purchase_time(time: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE.is_match(time) {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a receipt, logging the reason for any rejection to `log`.
///
/// ## Returns
/// - `Ok(())` when every check passes
/// - `Err(ValidationError)` for the first failing check
pub fn validate_receipt(receipt: &Receipt, log: &dyn LogSink) -> ValidationResult<()> {
    let result = check_required(receipt)
        .and_then(|()| check_items_present(receipt))
        .and_then(|()| check_retailer(receipt, log))
        .and_then(|()| check_purchase_date(receipt, log))
        .and_then(|()| check_purchase_time(receipt, log))
        .and_then(|()| check_amounts(receipt, log));

    if let Err(err) = &result {
        log.warn(&format!("receipt rejected: {err}"));
    }
    result
}

fn check_required(receipt: &Receipt) -> ValidationResult<()> {
    if receipt.retailer.is_empty() {
        return Err(ValidationError::missing("retailer"));
    }
    if receipt.purchase_date.is_empty() {
        return Err(ValidationError::missing("purchaseDate"));
    }
    if receipt.purchase_time.is_empty() {
        return Err(ValidationError::missing("purchaseTime"));
    }
    if receipt.total.is_empty() {
        return Err(ValidationError::missing("total"));
    }
    let Some(items) = &receipt.items else {
        return Err(ValidationError::missing("items"));
    };
    for (index, item) in items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::missing(format!(
                "items[{index}].shortDescription"
            )));
        }
        if item.price.is_empty() {
            return Err(ValidationError::missing(format!("items[{index}].price")));
        }
    }
    Ok(())
}

fn check_items_present(receipt: &Receipt) -> ValidationResult<()> {
    if receipt.items().is_empty() {
        return Err(ValidationError::NoItems);
    }
    Ok(())
}

fn check_retailer(receipt: &Receipt, log: &dyn LogSink) -> ValidationResult<()> {
    if !is_valid_retailer(&receipt.retailer) {
        log.error(&format!("invalid retailer: {:?}", receipt.retailer));
        return Err(ValidationError::InvalidRetailer);
    }
    Ok(())
}

fn check_purchase_date(receipt: &Receipt, log: &dyn LogSink) -> ValidationResult<()> {
    if parse_purchase_date(&receipt.purchase_date).is_none() {
        log.error(&format!("invalid purchase date: {:?}", receipt.purchase_date));
        return Err(ValidationError::InvalidPurchaseDate);
    }
    Ok(())
}

fn check_purchase_time(receipt: &Receipt, log: &dyn LogSink) -> ValidationResult<()> {
    if parse_purchase_time(&receipt.purchase_time).is_none() {
        log.error(&format!("invalid purchase time: {:?}", receipt.purchase_time));
        return Err(ValidationError::InvalidPurchaseTime);
    }
    Ok(())
}

/// Checks 6-8: total format, every price format, then the sum.
fn check_amounts(receipt: &Receipt, log: &dyn LogSink) -> ValidationResult<()> {
    if !is_currency(&receipt.total) {
        return Err(ValidationError::InvalidTotal);
    }
    let total: Money = receipt.total.parse().map_err(|e| {
        log.error(&format!("error parsing total: {e}"));
        ValidationError::InvalidTotal
    })?;

    let prices = receipt
        .items()
        .iter()
        .map(|item| {
            if !is_currency(&item.price) {
                return Err(ValidationError::InvalidItemPrice);
            }
            item.price.parse::<Money>().map_err(|e| {
                log.error(&format!("error parsing item price: {e}"));
                ValidationError::InvalidItemPrice
            })
        })
        .collect::<ValidationResult<Vec<Money>>>()?;
    let items_total: Money = prices.into_iter().sum();

    if total.abs_diff(items_total).cents() > TOTAL_TOLERANCE_CENTS {
        log.error(&format!(
            "total ({total}) does not match calculated total ({items_total})"
        ));
        return Err(ValidationError::TotalMismatch);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
