//! Defines the HTTP routes for the car catalog.

use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers::get_cars;
use crate::state::AppState;

pub fn cars_router() -> Router<Arc<AppState>> {
    Router::new().route("/get_cars", get(get_cars))
}
