//! Core `adapters` crate for abstracting the dealership's upstream services.
//!
//! This crate defines one trait per external service (dealer/review data,
//! sentiment analysis, car inventory search) and REST implementations of
//! each built on a shared [`HttpClient`]. The backend only talks to the
//! traits, so tests can substitute in-process fakes.

use async_trait::async_trait;
use serde_json::Value;

pub mod client;
pub mod dealers;
pub mod errors;
pub mod inventory;
pub mod models;
pub mod sentiment;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use dealers::RestDealerAdapter;
pub use errors::AdapterError;
pub use inventory::RestInventoryAdapter;
pub use models::{InventoryFilter, Review, Sentiment, SentimentResponse};
pub use sentiment::RestSentimentAdapter;

/// The dealer/review data service.
#[async_trait]
pub trait DealerAdapter: Send + Sync {
    /// Lists dealers, restricted to one state when `state` is given.
    async fn fetch_dealers(&self, state: Option<&str>) -> Result<Value, AdapterError>;

    async fn fetch_dealer(&self, dealer_id: &str) -> Result<Value, AdapterError>;

    async fn fetch_reviews(&self, dealer_id: &str) -> Result<Vec<Review>, AdapterError>;

    /// Submits a review body as-is and returns the upstream's reply.
    async fn insert_review(&self, review: &Value) -> Result<Value, AdapterError>;
}

/// The sentiment analysis service.
#[async_trait]
pub trait SentimentAdapter: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentResponse, AdapterError>;
}

/// The car inventory search service.
#[async_trait]
pub trait InventoryAdapter: Send + Sync {
    async fn fetch_cars(
        &self,
        dealer_id: &str,
        filter: &InventoryFilter,
    ) -> Result<Value, AdapterError>;
}
