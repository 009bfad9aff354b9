//! Backend-for-frontend of the dealership review site.
//!
//! Serves a JSON API for login/registration, the local car catalog, and
//! dealer data proxied from the upstream dealer/review service with
//! sentiment labels attached to every review.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::{net::TcpListener, signal};
use tracing::info;

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use config::Config;
use errors::StartupError;
use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = api::api_router().merge(auth::auth_router());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(middleware::cors_layer())
        .layer(middleware::trace_layer())
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), StartupError> {
    info!("Initializing state...");
    let address = config.listen_address();
    let state = AppState::new(config).await?;

    info!(
        "Upstreams: dealers at {}, sentiment at {}, inventory at {}",
        state.config.backend_url, state.config.sentiment_analyzer_url, state.config.searchcars_url
    );

    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": 200 }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
