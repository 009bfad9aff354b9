//! REST implementation of [`InventoryAdapter`] for the car search service.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::{client::HttpClient, errors::AdapterError, models::InventoryFilter, InventoryAdapter};

pub struct RestInventoryAdapter {
    http: HttpClient,
}

impl RestInventoryAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

/// Picks the search endpoint for the first populated filter field, as path
/// segments.
pub fn inventory_segments(dealer_id: &str, filter: &InventoryFilter) -> Vec<String> {
    let (endpoint, value) = if let Some(make) = &filter.make {
        ("carsbymake", make.clone())
    } else if let Some(model) = &filter.model {
        ("carsbymodel", model.clone())
    } else if let Some(year) = filter.year {
        ("carsbyyear", year.to_string())
    } else if let Some(mileage) = filter.mileage {
        ("carsbymaxmileage", mileage.to_string())
    } else if let Some(price) = filter.price {
        ("carsbyprice", price.to_string())
    } else {
        return vec!["cars".to_string(), dealer_id.to_string()];
    };

    vec![endpoint.to_string(), dealer_id.to_string(), value]
}

#[async_trait]
impl InventoryAdapter for RestInventoryAdapter {
    async fn fetch_cars(
        &self,
        dealer_id: &str,
        filter: &InventoryFilter,
    ) -> Result<Value, AdapterError> {
        self.http
            .get_segments(&inventory_segments(dealer_id, filter))
            .await
    }
}
