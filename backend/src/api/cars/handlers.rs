//! Handler functions for the car catalog API.
//!
//! The catalog is seeded on first read, so the handler only asks
//! `services::catalog` for the joined model/make list.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{errors::AppError, state::AppState};

pub async fn get_cars(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let cars = state.catalog.list_cars().await?;
    Ok(Json(json!({ "CarModels": cars })))
}
