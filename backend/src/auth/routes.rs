//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle login, logout and registration. They are merged into
//! the `/api` router next to the dealer and catalog routes.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login_user, logout_request, registration};
use crate::state::AppState;

pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", get(logout_request).post(logout_request))
        .route("/register", post(registration))
}
