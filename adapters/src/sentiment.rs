//! REST implementation of [`SentimentAdapter`].
//!
//! The analyzer takes the text as the last path segment of
//! `{base}/analyze/{text}`. The text is sent as a single encoded segment, so
//! `?`, `#` and `/` inside a review reach the analyzer intact.

use async_trait::async_trait;
use std::time::Duration;

use crate::{
    client::HttpClient, errors::AdapterError, models::SentimentResponse, SentimentAdapter,
};

pub struct RestSentimentAdapter {
    http: HttpClient,
}

impl RestSentimentAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl SentimentAdapter for RestSentimentAdapter {
    async fn analyze(&self, text: &str) -> Result<SentimentResponse, AdapterError> {
        self.http.get_segments(&["analyze", text]).await
    }
}
