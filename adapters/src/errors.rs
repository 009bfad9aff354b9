//! Custom error types specific to the `adapters` crate.
//!
//! Every call to an upstream service resolves to either a decoded payload or
//! one of these errors. Callers that only care about "data or no data" can
//! collapse them with `.ok()`, while logging keeps the underlying cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Invalid upstream URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl AdapterError {
    /// Classifies a `reqwest` failure for the given URL.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            AdapterError::Timeout { url }
        } else if let Some(status) = err.status() {
            AdapterError::Status {
                url,
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            AdapterError::Decode {
                url,
                reason: err.to_string(),
            }
        } else if err.is_builder() {
            AdapterError::InvalidUrl {
                url,
                reason: err.to_string(),
            }
        } else {
            AdapterError::Connection {
                url,
                reason: err.to_string(),
            }
        }
    }

    /// HTTP status returned by the upstream, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdapterError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_http_errors() {
        let err = AdapterError::Status {
            url: "http://localhost:3030/fetchDealers?".into(),
            status: 503,
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(
            err.to_string(),
            "http://localhost:3030/fetchDealers? responded with HTTP 503"
        );

        let err = AdapterError::Timeout {
            url: "http://localhost:3030".into(),
        };
        assert_eq!(err.status(), None);
    }
}
