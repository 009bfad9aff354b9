//! Thin JSON-over-HTTP helper shared by the REST adapters.
//!
//! Each `HttpClient` is bound to one upstream base URL and a fixed request
//! timeout. Query-style endpoints are appended to the base URL verbatim, so
//! callers are responsible for sanitizing anything they interpolate into them.
//! Path-style lookups go through [`segment_url`], which percent-encodes each
//! segment on its own.

use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::AdapterError;

/// HTTP request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::Client(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// `GET {base}{endpoint}?{params}`, decoding the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AdapterError> {
        let url = build_query_url(&self.base_url, endpoint, params);
        debug!("GET from {url}");
        self.send(&url, self.client.get(&url)).await
    }

    /// `GET {base}/{segment}/{segment}...` with no query string.
    pub async fn get_segments<T, S>(&self, segments: &[S]) -> Result<T, AdapterError>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        let url = segment_url(&self.base_url, segments)?;
        debug!("GET from {url}");
        self.send(url.as_str(), self.client.get(url.clone())).await
    }

    /// `POST {base}{endpoint}` with a JSON-encoded body.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AdapterError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST to {url}");
        self.send(&url, self.client.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, AdapterError> {
        let result = match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => response
                .json::<T>()
                .await
                .map_err(|e| AdapterError::from_reqwest(url, e)),
            Err(e) => Err(AdapterError::from_reqwest(url, e)),
        };

        if let Err(err) = &result {
            warn!("Request error: {err}");
        }
        result
    }
}

/// Joins base URL, endpoint and `key=value` pairs. Values are not encoded.
pub fn build_query_url(base_url: &str, endpoint: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base_url}{endpoint}?{query}")
}

/// Appends `segments` to the base URL's path, encoding `/`, `?`, `#` and
/// anything else that would change the URL's structure.
pub fn segment_url<S: AsRef<str>>(base_url: &str, segments: &[S]) -> Result<Url, AdapterError> {
    let invalid = |reason: String| AdapterError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_without_params_keeps_separator() {
        assert_eq!(
            build_query_url("http://localhost:3030", "/fetchDealers", &[]),
            "http://localhost:3030/fetchDealers?"
        );
    }

    #[test]
    fn query_url_joins_params_in_order_unencoded() {
        let url = build_query_url(
            "http://localhost:3030",
            "/fetchDealers",
            &[("state", "New York"), ("limit", "5")],
        );
        assert_eq!(url, "http://localhost:3030/fetchDealers?state=New York&limit=5");
    }

    #[test]
    fn segments_are_encoded_individually() {
        let url = segment_url("http://localhost:5050/", &["analyze", "50/50? #1 deal"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5050/analyze/50%2F50%3F%20%231%20deal"
        );
    }

    #[test]
    fn segments_extend_a_base_path() {
        let url = segment_url("http://search:3050/api", &["cars", "7"]).unwrap();
        assert_eq!(url.as_str(), "http://search:3050/api/cars/7");
    }

    #[test]
    fn unparsable_base_is_rejected() {
        let err = segment_url("not a url", &["cars"]).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidUrl { .. }), "{err:?}");
    }
}
