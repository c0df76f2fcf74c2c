use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Receipt;
use crate::scoring::calculate_points;
use crate::store::ScoreStore;
use crate::validator::validate_receipt;

/// Validates, scores and records receipts, and answers point lookups.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ScoreStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Scores an accepted receipt and returns the identifier it was stored under.
    pub fn process(&self, receipt: &Receipt) -> Result<String, AppError> {
        if !validate_receipt(receipt) {
            return Err(AppError::InvalidReceipt);
        }

        let points = calculate_points(receipt);
        let id = Uuid::new_v4().to_string();
        self.store.put(id.clone(), points)?;

        tracing::info!(
            "Processed receipt {} from {:?}: {} points",
            id,
            receipt.retailer,
            points
        );
        Ok(id)
    }

    pub fn points(&self, id: &str) -> Result<u64, AppError> {
        self.store.get(id).ok_or_else(|| {
            tracing::debug!("No receipt stored for id {}", id);
            AppError::NotFound
        })
    }
}
