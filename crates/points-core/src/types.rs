//! # Domain Types
//!
//! The receipt as submitted by a client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐             │
//! │  │       Receipt        │ 1      n │        Item          │             │
//! │  │  ──────────────────  │─────────►│  ──────────────────  │             │
//! │  │  retailer            │          │  short_description   │             │
//! │  │  purchase_date       │          │  price  ("6.49")     │             │
//! │  │  purchase_time       │          └──────────────────────┘             │
//! │  │  total   ("35.35")   │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field stays in its textual wire form. Validation decides whether the
//! text is acceptable; scoring parses what it needs.
//!
//! Missing or `null` text fields decode to empty strings, and missing or
//! `null` items decode to `None`, so the validator, not the decoder, reports
//! them.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Item
// =============================================================================

/// One line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Description as printed, including any surrounding whitespace.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_description: String,

    /// Price with exactly two fraction digits, e.g. `"6.49"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Description with leading and trailing whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Immutable once constructed: nothing in this crate takes `&mut Receipt`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name; ASCII letters, digits, whitespace, `-` and `&` only.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub retailer: String,

    /// Purchase date, `"YYYY-MM-DD"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_date: String,

    /// Purchase time, `"HH:MM"` on a 24-hour clock.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_time: String,

    /// Line items in the order printed; `None` when the body had no list.
    #[serde(default)]
    pub items: Option<Vec<Item>>,

    /// Declared total with exactly two fraction digits.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub total: String,
}

impl Receipt {
    /// The line items, empty when none were submitted.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
