//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains, the car
//! catalog and dealer data, excluding core authentication routes which are
//! handled separately.

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod cars;
pub mod dealer;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(cars::routes::cars_router())
        .merge(dealer::routes::dealer_router())
}
