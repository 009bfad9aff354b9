//! Handler functions for the dealer API.
//!
//! These functions validate dealer ids, call `services::data_aggregator`,
//! and wrap the upstream data in `{"status": 200, ...}` bodies. An upstream
//! failure is logged by the adapter and served as empty data.

use std::sync::Arc;

use adapters::InventoryFilter;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{json, Value};

use crate::{auth::CurrentUser, errors::AppError, services::DealerId, state::AppState};

pub async fn get_all_dealerships(State(state): State<Arc<AppState>>) -> Json<Value> {
    dealerships(&state, None).await
}

pub async fn get_dealerships_by_state(
    State(state): State<Arc<AppState>>,
    Path(us_state): Path<String>,
) -> Json<Value> {
    dealerships(&state, Some(us_state.as_str())).await
}

async fn dealerships(state: &AppState, us_state: Option<&str>) -> Json<Value> {
    let dealers = state.dealers.list_dealers(us_state).await.ok();
    Json(json!({ "status": 200, "dealers": dealers }))
}

pub async fn get_dealer_details(
    State(state): State<Arc<AppState>>,
    Path(dealer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let dealer_id = DealerId::parse(Some(dealer_id.as_str()))?;
    let dealer = state.dealers.get_dealer(dealer_id).await.ok();
    Ok(Json(json!({ "status": 200, "dealer": dealer })))
}

pub async fn get_dealer_reviews(
    State(state): State<Arc<AppState>>,
    Path(dealer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let dealer_id = DealerId::parse(Some(dealer_id.as_str()))?;
    let reviews = state
        .dealers
        .list_reviews(dealer_id)
        .await
        .unwrap_or_default();
    Ok(Json(json!({ "status": 200, "reviews": reviews })))
}

/// Fallback for dealer routes called without an id.
pub async fn missing_dealer_id() -> AppError {
    AppError::BadRequest
}

pub async fn add_review(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    if current.is_anonymous() {
        return Err(AppError::Unauthorized);
    }

    let Json(review) = payload.map_err(|_| AppError::MalformedPayload)?;
    state
        .dealers
        .add_review(&review)
        .await
        .map_err(AppError::ReviewRejected)?;

    Ok(Json(json!({ "status": 200 })))
}

pub async fn get_inventory(
    State(state): State<Arc<AppState>>,
    Path(dealer_id): Path<String>,
    filter: Result<Query<InventoryFilter>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let dealer_id = DealerId::parse(Some(dealer_id.as_str()))?;
    let Query(filter) = filter.map_err(|_| AppError::BadRequest)?;

    let cars = state
        .dealers
        .list_inventory(dealer_id, &filter)
        .await
        .ok();
    Ok(Json(json!({ "status": 200, "cars": cars })))
}
