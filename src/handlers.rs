use crate::errors::AppError;
use crate::models::*;
use crate::services::ReceiptService;
use crate::store::ScoreStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            receipts: ReceiptService::new(store),
        }
    }
}

/// POST /receipts/process
///
/// Any body that does not deserialize into a [`Receipt`] is reported the same
/// way as a receipt that fails validation.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!("Rejected receipt body: {}", rejection.body_text());
        AppError::InvalidReceipt
    })?;

    let id = state.receipts.process(&receipt)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    tracing::debug!("Looking up points for receipt {}", id);

    let points = state.receipts.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Builds the application router with its middleware stack.
pub fn create_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::new())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
