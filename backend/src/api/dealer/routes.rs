//! Defines the HTTP routes for dealer, review and inventory data.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_review, get_all_dealerships, get_dealer_details, get_dealer_reviews,
    get_dealerships_by_state, get_inventory, missing_dealer_id,
};
use crate::state::AppState;

pub fn dealer_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get_dealers", get(get_all_dealerships))
        .route("/get_dealers/{state}", get(get_dealerships_by_state))
        .route("/dealer", get(missing_dealer_id))
        .route("/dealer/{dealer_id}", get(get_dealer_details))
        .route("/reviews/dealer", get(missing_dealer_id))
        .route("/reviews/dealer/{dealer_id}", get(get_dealer_reviews))
        .route("/inventory/{dealer_id}", get(get_inventory))
        .route("/add_review", post(add_review))
}
