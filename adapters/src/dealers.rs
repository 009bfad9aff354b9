//! REST implementation of [`DealerAdapter`] for the dealer/review data service.
//!
//! Endpoints:
//! - `GET /fetchDealers`
//! - `GET /fetchDealers/{state}`
//! - `GET /fetchDealer/{dealer_id}`
//! - `GET /fetchReviews/dealer/{dealer_id}`
//! - `POST /insert_review`

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::{client::HttpClient, errors::AdapterError, models::Review, DealerAdapter};

pub const INSERT_REVIEW_ENDPOINT: &str = "/insert_review";

pub struct RestDealerAdapter {
    http: HttpClient,
}

impl RestDealerAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

pub fn dealers_endpoint(state: Option<&str>) -> String {
    match state {
        Some(state) => format!("/fetchDealers/{state}"),
        None => "/fetchDealers".to_string(),
    }
}

pub fn dealer_endpoint(dealer_id: &str) -> String {
    format!("/fetchDealer/{dealer_id}")
}

pub fn reviews_endpoint(dealer_id: &str) -> String {
    format!("/fetchReviews/dealer/{dealer_id}")
}

#[async_trait]
impl DealerAdapter for RestDealerAdapter {
    async fn fetch_dealers(&self, state: Option<&str>) -> Result<Value, AdapterError> {
        self.http.get(&dealers_endpoint(state), &[]).await
    }

    async fn fetch_dealer(&self, dealer_id: &str) -> Result<Value, AdapterError> {
        self.http.get(&dealer_endpoint(dealer_id), &[]).await
    }

    async fn fetch_reviews(&self, dealer_id: &str) -> Result<Vec<Review>, AdapterError> {
        self.http.get(&reviews_endpoint(dealer_id), &[]).await
    }

    async fn insert_review(&self, review: &Value) -> Result<Value, AdapterError> {
        self.http.post(INSERT_REVIEW_ENDPOINT, review).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_endpoints() {
        assert_eq!(dealers_endpoint(None), "/fetchDealers");
        assert_eq!(dealers_endpoint(Some("Kansas")), "/fetchDealers/Kansas");
        assert_eq!(dealer_endpoint("15"), "/fetchDealer/15");
        assert_eq!(reviews_endpoint("29"), "/fetchReviews/dealer/29");
    }
}
