//! Generic data models for the `adapters` crate.
//!
//! Dealers are owned by the upstream data service and passed through
//! untouched, so they stay raw JSON. Reviews are kept as JSON objects too,
//! with accessors for the few fields this layer reads or writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field of a review record holding the review text.
pub const REVIEW_TEXT_FIELD: &str = "review";

/// Field merged into each review after sentiment analysis.
pub const SENTIMENT_FIELD: &str = "sentiment";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Review(pub Map<String, Value>);

impl Review {
    /// The review text, or an empty string when the upstream omitted it.
    pub fn text(&self) -> &str {
        self.0
            .get(REVIEW_TEXT_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.0.get(SENTIMENT_FIELD).and_then(Value::as_str)
    }

    /// Attaches a sentiment label, replacing any label the upstream sent.
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.0.insert(
            SENTIMENT_FIELD.to_string(),
            Value::String(sentiment.to_string()),
        );
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    #[serde(other)]
    Unknown,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned by the sentiment analyzer's `analyze/{text}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentResponse {
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

impl SentimentResponse {
    pub fn label(&self) -> Sentiment {
        self.sentiment.unwrap_or(Sentiment::Unknown)
    }
}

/// Narrows a dealer's inventory listing. Only the first populated field is
/// sent upstream, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InventoryFilter {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<u32>,
    pub mileage: Option<u32>,
    pub price: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn review(value: Value) -> Review {
        serde_json::from_value(value).expect("review object")
    }

    #[test]
    fn reads_review_text() {
        let r = review(json!({"id": 1, "review": "Great service", "dealership": 15}));
        assert_eq!(r.text(), "Great service");

        let r = review(json!({"id": 2}));
        assert_eq!(r.text(), "");
    }

    #[test]
    fn sentiment_is_merged_into_review() {
        let r = review(json!({"id": 1, "review": "ok", "sentiment": "stale"}))
            .with_sentiment(Sentiment::Neutral);

        assert_eq!(r.sentiment(), Some("neutral"));
        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out["id"], 1);
        assert_eq!(out["sentiment"], "neutral");
    }

    #[test]
    fn unrecognised_labels_are_unknown() {
        let resp: SentimentResponse =
            serde_json::from_value(json!({"sentiment": "ecstatic"})).unwrap();
        assert_eq!(resp.label(), Sentiment::Unknown);

        let resp: SentimentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resp.label(), Sentiment::Unknown);

        let resp: SentimentResponse =
            serde_json::from_value(json!({"sentiment": "positive"})).unwrap();
        assert_eq!(resp.label(), Sentiment::Positive);
    }
}
