//! # Scoring Module
//!
//! Computes the loyalty points for an accepted receipt.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                   Points                          │
//! │  ────────────────────────────────────   ─────────────────────────────   │
//! │  1. alphanumeric chars in retailer      +1 each                        │
//! │  2. total has no cents                  +50                            │
//! │  3. total is a multiple of 0.25         +25                            │
//! │  4. every two items                     +5                             │
//! │  5. trimmed description len % 3 == 0    +ceil(price × 0.2) per item    │
//! │  6. purchase day is odd                 +6                             │
//! │  7. 14:00 < time < 16:00                +10                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail Soft
//! Scoring has no error channel. Callers validate first; if a field still
//! cannot be read, the problem is logged and that field counts as zero
//! (amounts) or as not qualifying (date, time).
//!
//! ## Example
//! ```rust
//! use points_core::{score_receipt, Item, NullSink, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Dollar General".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: Some(vec![Item::new("abc", "10.00"), Item::new("abcd", "20.39")]),
//!     total: "30.39".to_string(),
//! };
//! // 13 (retailer) + 5 (pair) + 2 (abc) + 6 (odd day)
//! assert_eq!(score_receipt(&receipt, &NullSink), 26);
//! ```

use chrono::{Datelike, NaiveTime, Timelike};

use crate::log::LogSink;
use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::validation::{parse_purchase_date, parse_purchase_time};

// =============================================================================
// Rule Constants
// =============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER: Money = Money::from_cents(25);
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// `ceil(price * 1/5)` for qualifying descriptions.
const DESCRIPTION_RATE: (i64, i64) = (1, 5);

// =============================================================================
// Scorer
// =============================================================================

/// Sums all seven rule contributions for `receipt`.
pub fn score_receipt(receipt: &Receipt, log: &dyn LogSink) -> u64 {
    let total = total_amount(receipt, log);

    retailer_points(&receipt.retailer)
        + round_dollar_points(total)
        + quarter_multiple_points(total)
        + item_pair_points(receipt.items().len())
        + description_points(receipt.items(), log)
        + odd_day_points(&receipt.purchase_date, log)
        + afternoon_points(&receipt.purchase_time, log)
}

/// Rule 1: one point per Unicode letter or digit.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Rule 2.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Rule 3.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Rule 4: five points for every complete pair.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Rule 5, summed over all items.
pub fn description_points(items: &[Item], log: &dyn LogSink) -> u64 {
    items
        .iter()
        .filter(|item| item.trimmed_description().chars().count() % 3 == 0)
        .map(|item| {
            let price = parse_amount(&item.price, "item price", log);
            price.ceil_dollars_scaled(DESCRIPTION_RATE.0, DESCRIPTION_RATE.1).max(0) as u64
        })
        .sum()
}

/// Rule 6.
pub fn odd_day_points(purchase_date: &str, log: &dyn LogSink) -> u64 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Some(_) => 0,
        None => {
            log.error(&format!("unreadable purchase date: {purchase_date:?}"));
            0
        }
    }
}

/// Rule 7.
pub fn afternoon_points(purchase_time: &str, log: &dyn LogSink) -> u64 {
    match parse_purchase_time(purchase_time) {
        Some(time) if is_afternoon_window(time) => AFTERNOON_POINTS,
        Some(_) => 0,
        None => {
            log.error(&format!("unreadable purchase time: {purchase_time:?}"));
            0
        }
    }
}

/// 14:01 through 15:59 inclusive. 14:00 and 16:00 are outside.
fn is_afternoon_window(time: NaiveTime) -> bool {
    let (hour, minute) = (time.hour(), time.minute());
    ((14..16).contains(&hour) && minute > 0) || (hour == 15 && minute == 0)
}

fn total_amount(receipt: &Receipt, log: &dyn LogSink) -> Money {
    parse_amount(&receipt.total, "total", log)
}

/// Reads an amount, falling back to zero. Only reachable with unvalidated
/// input.
fn parse_amount(amount: &str, what: &str, log: &dyn LogSink) -> Money {
    amount.parse().unwrap_or_else(|e| {
        log.error(&format!("error parsing {what}: {e}"));
        Money::zero()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::testing::RecordingSink;
    use crate::log::NullSink;
    use crate::validation::validate_receipt;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        items: &[(&str, &str)],
        total: &str,
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: Some(items.iter().map(|(d, p)| Item::new(*d, *p)).collect()),
            total: total.to_string(),
        }
    }

    fn target() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            &[("Gatorade", "2.25"); 4],
            "9.00",
        )
    }

    #[test]
    fn test_target_scores_28() {
        let r = target();
        assert_eq!(validate_receipt(&r, &NullSink), Ok(()));
        // 6 + 10 (pairs) + 3 + 3 (descriptions) + 6 (odd day)
        assert_eq!(score_receipt(&r, &NullSink), 28);
    }

    #[test]
    fn test_corner_market_scores_109() {
        let r = corner_market();
        assert_eq!(validate_receipt(&r, &NullSink), Ok(()));
        // 14 + 50 + 25 + 10 (pairs) + 10 (afternoon)
        assert_eq!(score_receipt(&r, &NullSink), 109);
    }

    #[test]
    fn test_dollar_general_scores_26() {
        let r = receipt(
            "Dollar General",
            "2022-01-01",
            "13:01",
            &[("abc", "10.00"), ("abcd", "20.39")],
            "30.39",
        );
        assert_eq!(validate_receipt(&r, &NullSink), Ok(()));
        assert_eq!(score_receipt(&r, &NullSink), 26);
    }

    #[test]
    fn test_walmart_scores_50() {
        let r = receipt(
            "Walmart1",
            "2022-01-02",
            "14:01",
            &[("   abc   ", "6.49"), ("abcd  ", "1.26")],
            "7.75",
        );
        assert_eq!(validate_receipt(&r, &NullSink), Ok(()));
        // 8 + 25 + 5 + 2 + 10
        assert_eq!(score_receipt(&r, &NullSink), 50);
    }

    #[test]
    fn test_retailer_points_count_letters_and_digits() {
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("Walmart1"), 8);
        assert_eq!(retailer_points("Café-Zoë 2"), 8);
        assert_eq!(retailer_points("- & -"), 0);
    }

    #[test]
    fn test_total_bonuses() {
        let odd = Money::from_cents(3535);
        assert_eq!(round_dollar_points(odd) + quarter_multiple_points(odd), 0);

        let nine = Money::from_cents(900);
        assert_eq!(round_dollar_points(nine), 50);
        assert_eq!(quarter_multiple_points(nine), 25);

        let quarter_only = Money::from_cents(775);
        assert_eq!(round_dollar_points(quarter_only), 0);
        assert_eq!(quarter_multiple_points(quarter_only), 25);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_points() {
        let items = [
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Gatorade", "2.25"),
            Item::new("abc", "35.00"),
        ];
        // 18 chars → ceil(2.45) = 3; 8 chars → 0; 3 chars → exactly 7
        assert_eq!(description_points(&items, &NullSink), 10);
    }

    #[test]
    fn test_whitespace_only_description_qualifies() {
        let items = [Item::new("   ", "6.49")];
        assert_eq!(description_points(&items, &NullSink), 2);
    }

    #[test]
    fn test_edge_whitespace_does_not_change_score() {
        let plain = receipt("Shop", "2022-01-02", "10:00", &[("abc", "6.49")], "6.49");
        let padded = receipt("Shop", "2022-01-02", "10:00", &[("  abc\t", "6.49")], "6.49");
        assert_eq!(
            score_receipt(&plain, &NullSink),
            score_receipt(&padded, &NullSink)
        );

        // Inner whitespace changes the trimmed length bucket.
        let inner = receipt("Shop", "2022-01-02", "10:00", &[("a bc", "6.49")], "6.49");
        assert_ne!(
            score_receipt(&plain, &NullSink),
            score_receipt(&inner, &NullSink)
        );
    }

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points("2022-01-01", &NullSink), 6);
        assert_eq!(odd_day_points("2022-01-31", &NullSink), 6);
        assert_eq!(odd_day_points("2022-03-20", &NullSink), 0);
    }

    #[test]
    fn test_afternoon_boundaries() {
        let points = |t: &str| afternoon_points(t, &NullSink);
        assert_eq!(points("14:00"), 0);
        assert_eq!(points("14:01"), 10);
        assert_eq!(points("15:00"), 10);
        assert_eq!(points("15:59"), 10);
        assert_eq!(points("16:00"), 0);
        assert_eq!(points("13:59"), 0);
        assert_eq!(points("16:01"), 0);
    }

    #[test]
    fn test_rules_sum_in_any_order() {
        let r = corner_market();
        let total = total_amount(&r, &NullSink);
        let mut parts = [
            retailer_points(&r.retailer),
            round_dollar_points(total),
            quarter_multiple_points(total),
            item_pair_points(r.items().len()),
            description_points(r.items(), &NullSink),
            odd_day_points(&r.purchase_date, &NullSink),
            afternoon_points(&r.purchase_time, &NullSink),
        ];
        let forward: u64 = parts.iter().sum();
        parts.reverse();
        let backward: u64 = parts.iter().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward, score_receipt(&r, &NullSink));
    }

    #[test]
    fn test_deterministic() {
        let r = target();
        let first = score_receipt(&r, &NullSink);
        for _ in 0..10 {
            assert_eq!(score_receipt(&r, &NullSink), first);
        }
    }

    // Everything below feeds input that validation would reject.

    #[test]
    fn test_unparsable_price_counts_as_zero_when_validation_bypassed() {
        let sink = RecordingSink::default();
        let items = [Item::new("abc", "abc"), Item::new("def", "10.00")];
        assert_eq!(description_points(&items, &sink), 2);
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_unparsable_total_counts_as_zero_when_validation_bypassed() {
        let sink = RecordingSink::default();
        let r = receipt("", "2022-01-02", "10:00", &[("ab", "1.00")], "abc");
        // zero total is a round dollar and a quarter multiple
        assert_eq!(score_receipt(&r, &sink), 75);
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_unparsable_date_and_time_score_nothing_when_validation_bypassed() {
        let sink = RecordingSink::default();
        assert_eq!(odd_day_points("2022-1-1", &sink), 0);
        assert_eq!(afternoon_points("3pm", &sink), 0);
        assert_eq!(sink.entries().len(), 2);
    }
}
