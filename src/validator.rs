//! Structural validation of submitted receipts.
//!
//! Character classes are ASCII-only: a "word character" is `[A-Za-z0-9_]` and
//! whitespace is one of tab, newline, form feed, carriage return or space
//! (vertical tab is not whitespace here).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Item, Receipt};

static RETAILER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:[\w\t\n\f\r &-])+$").expect("Invalid retailer regex")
});

static DESCRIPTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:[\w\t\n\f\r -])+$").expect("Invalid description regex")
});

/// Unsigned amount with exactly two fraction digits
static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex")
});

/// Retailer: non-empty; word characters, whitespace, `-` and `&` only.
pub fn is_valid_retailer(retailer: &str) -> bool {
    RETAILER_REGEX.is_match(retailer)
}

/// Money amount: unsigned digits, a decimal point, exactly two fraction digits.
pub fn is_valid_amount(amount: &str) -> bool {
    AMOUNT_REGEX.is_match(amount)
}

/// Item description: non-empty; word characters, whitespace and `-` only.
pub fn is_valid_description(description: &str) -> bool {
    DESCRIPTION_REGEX.is_match(description)
}

pub fn is_valid_item(item: &Item) -> bool {
    is_valid_description(&item.short_description) && is_valid_amount(&item.price)
}

/// Returns `true` when every pattern constraint holds.
///
/// Date and time are not checked here; malformed values simply earn no
/// points from the rules that read them.
pub fn validate_receipt(receipt: &Receipt) -> bool {
    if !is_valid_retailer(&receipt.retailer) {
        tracing::warn!("Invalid retailer: {:?}", receipt.retailer);
        return false;
    }

    if !is_valid_amount(&receipt.total) {
        tracing::warn!("Invalid total: {:?}", receipt.total);
        return false;
    }

    if let Some((index, item)) = receipt
        .items
        .iter()
        .enumerate()
        .find(|(_, item)| !is_valid_item(item))
    {
        tracing::warn!("Invalid item at index {}: {:?}", index, item);
        return false;
    }

    true
}
