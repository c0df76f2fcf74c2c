//! Points calculation.
//!
//! The total is the sum of seven independent rules. A sub-field that fails to
//! parse (total, price, date, hour) contributes zero to the rule that reads it
//! and never aborts the calculation.
//!
//! Points are `u64`. Rule values and sums that exceed `u64::MAX` (only
//! reachable with absurdly large amounts) saturate at `u64::MAX`.

use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::models::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Purchases with an hour in `[AFTERNOON_START, AFTERNOON_END)` earn the afternoon bonus.
const AFTERNOON_START: i64 = 14;
const AFTERNOON_END: i64 = 16;

/// Zero-padded `YYYY-MM-DD`; chrono alone also accepts unpadded and signed years.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex")
});

/// Per-rule contributions for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes every rule's contribution for `receipt`.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// Total points awarded for `receipt`.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    let breakdown = score_breakdown(receipt);
    tracing::debug!("Points breakdown: {:?}", breakdown);
    breakdown.total()
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

pub fn round_dollar_points(total: &str) -> u64 {
    if total.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points when the total is a whole number of quarters.
pub fn quarter_multiple_points(total: &str) -> u64 {
    let Some(amount) = parse_amount(total) else {
        return 0;
    };

    let cents = (amount * BigDecimal::from(100)).round(0);
    if (cents % BigDecimal::from(25)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// `trunc(price * 0.2) + 1` when the trimmed description length is a multiple of 3.
pub fn description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        tracing::debug!("Unparseable item price {:?}, no description points", item.price);
        return 0;
    };

    let fifth = BigDecimal::new(2.into(), 1);
    let truncated = (price * fifth).with_scale(0);
    // Only reachable with a negative price that slipped past validation.
    if truncated < BigDecimal::zero() {
        return 0;
    }

    truncated
        .to_u64()
        .unwrap_or(u64::MAX)
        .saturating_add(1)
}

/// 6 points when the purchase date is a real calendar date on an odd day.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    if !DATE_SHAPE.is_match(purchase_date) {
        tracing::debug!("Malformed purchase date {:?}", purchase_date);
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!("Unparseable purchase date {:?}: {}", purchase_date, e);
            0
        }
    }
}

/// 10 points when the purchase hour falls in the 2pm-4pm window.
///
/// The time must have exactly two `:`-separated fields; the minute is not inspected.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    let fields: Vec<&str> = purchase_time.split(':').collect();
    let [hour, _minute] = fields.as_slice() else {
        return 0;
    };

    match hour.parse::<i64>() {
        Ok(hour) if (AFTERNOON_START..AFTERNOON_END).contains(&hour) => AFTERNOON_POINTS,
        _ => 0,
    }
}

fn parse_amount(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw).ok()
}
