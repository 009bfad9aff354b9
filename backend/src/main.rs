//! Main entry point for the dealership backend.
//!
//! This file initializes logging, loads configuration from the environment,
//! and hands over to `backend::start_server`, which sets up the database,
//! the upstream adapters and the Axum router.

use std::process::ExitCode;

use backend::{config::Config, start_server};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let result = match Config::load() {
        Ok(config) => start_server(config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
