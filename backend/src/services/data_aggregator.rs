//! Logic for collecting and enriching dealer and review data.
//!
//! This module gathers raw data from the upstream dealer/review service,
//! attaches a sentiment label to every review, and hands the result to the
//! API handlers. Upstream failures come back as [`AdapterError`]s; whether
//! they degrade to empty data is the caller's decision.

use std::{fmt, sync::Arc};

use adapters::{
    AdapterError, DealerAdapter, InventoryAdapter, InventoryFilter, Review, Sentiment,
    SentimentAdapter,
};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;

/// State value meaning "no state filter".
pub const ALL_STATES: &str = "All";

/// A validated, non-zero numeric dealer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerId(u64);

impl DealerId {
    /// Rejects missing, empty, `null`, zero and non-numeric ids.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::BadRequest);
        }

        match raw.parse::<u64>() {
            Ok(0) | Err(_) => Err(AppError::BadRequest),
            Ok(id) => Ok(Self(id)),
        }
    }
}

impl fmt::Display for DealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct DealerAggregator {
    dealers: Arc<dyn DealerAdapter>,
    sentiment: Arc<dyn SentimentAdapter>,
    inventory: Arc<dyn InventoryAdapter>,
}

impl DealerAggregator {
    pub fn new(
        dealers: Arc<dyn DealerAdapter>,
        sentiment: Arc<dyn SentimentAdapter>,
        inventory: Arc<dyn InventoryAdapter>,
    ) -> Self {
        Self {
            dealers,
            sentiment,
            inventory,
        }
    }

    /// Lists every dealer, or only those in `state` unless it is "All".
    pub async fn list_dealers(&self, state: Option<&str>) -> Result<Value, AdapterError> {
        let state = state.filter(|state| *state != ALL_STATES);
        self.dealers.fetch_dealers(state).await
    }

    pub async fn get_dealer(&self, dealer_id: DealerId) -> Result<Value, AdapterError> {
        self.dealers.fetch_dealer(&dealer_id.to_string()).await
    }

    /// Fetches a dealer's reviews and labels each one, one analyzer call at
    /// a time. A failed analysis labels that review `unknown`.
    pub async fn list_reviews(&self, dealer_id: DealerId) -> Result<Vec<Review>, AdapterError> {
        let reviews = self.dealers.fetch_reviews(&dealer_id.to_string()).await?;

        let mut enriched = Vec::with_capacity(reviews.len());
        for review in reviews {
            let sentiment = self.analyze(review.text()).await;
            enriched.push(review.with_sentiment(sentiment));
        }

        Ok(enriched)
    }

    pub async fn add_review(&self, review: &Value) -> Result<Value, AdapterError> {
        self.dealers.insert_review(review).await
    }

    pub async fn list_inventory(
        &self,
        dealer_id: DealerId,
        filter: &InventoryFilter,
    ) -> Result<Value, AdapterError> {
        self.inventory
            .fetch_cars(&dealer_id.to_string(), filter)
            .await
    }

    async fn analyze(&self, text: &str) -> Sentiment {
        match self.sentiment.analyze(text).await {
            Ok(response) => response.label(),
            Err(err) => {
                warn!("Sentiment unavailable, labelling review unknown: {err}");
                Sentiment::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters::SentimentResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDealers {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DealerAdapter for RecordingDealers {
        async fn fetch_dealers(&self, state: Option<&str>) -> Result<Value, AdapterError> {
            let call = match state {
                Some(state) => format!("/fetchDealers/{state}"),
                None => "/fetchDealers".to_string(),
            };
            self.calls.lock().unwrap().push(call);
            Ok(json!([]))
        }

        async fn fetch_dealer(&self, dealer_id: &str) -> Result<Value, AdapterError> {
            self.calls.lock().unwrap().push(format!("/fetchDealer/{dealer_id}"));
            Ok(json!([{"id": dealer_id}]))
        }

        async fn fetch_reviews(&self, _dealer_id: &str) -> Result<Vec<Review>, AdapterError> {
            let reviews = json!([
                {"id": 1, "review": "fantastic"},
                {"id": 2, "review": "FAIL"},
                {"id": 3, "review": "terrible"},
            ]);
            Ok(serde_json::from_value(reviews).unwrap())
        }

        async fn insert_review(&self, review: &Value) -> Result<Value, AdapterError> {
            Ok(review.clone())
        }
    }

    struct KeywordSentiment;

    #[async_trait]
    impl SentimentAdapter for KeywordSentiment {
        async fn analyze(&self, text: &str) -> Result<SentimentResponse, AdapterError> {
            let label = match text {
                "FAIL" => {
                    return Err(AdapterError::Timeout {
                        url: format!("http://localhost:5050/analyze/{text}"),
                    })
                }
                "fantastic" => json!("positive"),
                _ => Value::Null,
            };
            Ok(serde_json::from_value(json!({ "sentiment": label })).unwrap())
        }
    }

    struct NoInventory;

    #[async_trait]
    impl InventoryAdapter for NoInventory {
        async fn fetch_cars(
            &self,
            _dealer_id: &str,
            _filter: &InventoryFilter,
        ) -> Result<Value, AdapterError> {
            Ok(json!([]))
        }
    }

    fn aggregator(dealers: Arc<RecordingDealers>) -> DealerAggregator {
        DealerAggregator::new(dealers, Arc::new(KeywordSentiment), Arc::new(NoInventory))
    }

    #[test]
    fn falsy_dealer_ids_are_rejected() {
        for raw in [None, Some(""), Some("0"), Some("000"), Some("null"), Some("12a"), Some("-3")] {
            assert!(
                matches!(DealerId::parse(raw), Err(AppError::BadRequest)),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(DealerId::parse(Some("15")).unwrap().to_string(), "15");
        assert_eq!(DealerId::parse(Some("007")).unwrap().to_string(), "7");
    }

    #[tokio::test]
    async fn state_filter_selects_endpoint() {
        let dealers = Arc::new(RecordingDealers::default());
        let service = aggregator(dealers.clone());

        service.list_dealers(None).await.unwrap();
        service.list_dealers(Some("All")).await.unwrap();
        service.list_dealers(Some("Texas")).await.unwrap();
        service.list_dealers(Some("all")).await.unwrap();

        assert_eq!(
            *dealers.calls.lock().unwrap(),
            vec![
                "/fetchDealers",
                "/fetchDealers",
                "/fetchDealers/Texas",
                "/fetchDealers/all",
            ]
        );
    }

    #[tokio::test]
    async fn every_review_gets_a_sentiment() {
        let service = aggregator(Arc::new(RecordingDealers::default()));
        let reviews = service
            .list_reviews(DealerId::parse(Some("3")).unwrap())
            .await
            .unwrap();

        let labels: Vec<_> = reviews.iter().map(|r| r.sentiment()).collect();
        assert_eq!(
            labels,
            vec![Some("positive"), Some("unknown"), Some("unknown")]
        );
    }
}
