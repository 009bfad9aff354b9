//! Central module for application-wide configuration settings.
//!
//! This module handles loading the server's listen address, the database URL,
//! and the base URLs of the upstream services (dealer/review data, sentiment
//! analyzer, car inventory search) from the environment. The resulting
//! [`Config`] is built once at startup and handed to whatever needs it.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3030";
pub const DEFAULT_SENTIMENT_ANALYZER_URL: &str = "http://localhost:5050/";
pub const DEFAULT_SEARCHCARS_URL: &str = "http://localhost:3050/";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dealership.db?mode=rwc";
/// Two weeks, the usual lifetime of a browser login.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1_209_600;

#[derive(Error, Debug)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub database_url: String,
    pub backend_url: String,
    pub sentiment_analyzer_url: String,
    pub searchcars_url: String,
    pub request_timeout: Duration,
    pub session_ttl: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = try_load(&lookup, "REQUEST_TIMEOUT_SECS", "10")?;
        let session_ttl_secs: u64 = try_load(
            &lookup,
            "SESSION_TTL_SECS",
            &DEFAULT_SESSION_TTL_SECS.to_string(),
        )?;

        Ok(Self {
            bind_address: try_load(&lookup, "BIND_ADDRESS", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "8000")?,
            database_url: try_load(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
            backend_url: try_load(&lookup, "backend_url", DEFAULT_BACKEND_URL)?,
            sentiment_analyzer_url: try_load(
                &lookup,
                "sentiment_analyzer_url",
                DEFAULT_SENTIMENT_ANALYZER_URL,
            )?,
            searchcars_url: try_load(&lookup, "searchcars_url", DEFAULT_SEARCHCARS_URL)?,
            request_timeout: Duration::from_secs(timeout_secs),
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        }
    })
}
