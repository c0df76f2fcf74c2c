use serde::{Deserialize, Serialize};

// ============ Request Models ============

/// A submitted purchase record.
///
/// All fields arrive as strings exactly as the client sent them; numeric and
/// date interpretation happens during validation and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the store the purchase was made at.
    pub retailer: String,
    /// Purchase date in `YYYY-MM-DD` form.
    pub purchase_date: String,
    /// Purchase time in 24-hour `HH:MM` form.
    pub purchase_time: String,
    /// Line items, in the order they appear on the receipt.
    pub items: Vec<Item>,
    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

// ============ Response Models ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
