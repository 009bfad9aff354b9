//! Shared application state handed to every handler.
//!
//! Owns the configuration, the authentication service, the car catalog and
//! the dealer aggregator, each wired to its database connection or upstream
//! adapters once at startup.

use std::sync::Arc;

use adapters::{
    DealerAdapter, InventoryAdapter, RestDealerAdapter, RestInventoryAdapter,
    RestSentimentAdapter, SentimentAdapter,
};
use sea_orm::DatabaseConnection;

use crate::{
    auth::AuthService,
    config::Config,
    database,
    errors::StartupError,
    services::{CatalogService, DealerAggregator},
};

pub struct AppState {
    pub config: Config,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub dealers: DealerAggregator,
}

impl AppState {
    /// Connects the database and builds REST adapters from `config`.
    pub async fn new(config: Config) -> Result<Arc<Self>, StartupError> {
        let db = database::connect(&config.database_url).await?;

        let timeout = config.request_timeout;
        let dealers = Arc::new(RestDealerAdapter::new(config.backend_url.clone(), timeout)?);
        let sentiment = Arc::new(RestSentimentAdapter::new(
            config.sentiment_analyzer_url.clone(),
            timeout,
        )?);
        let inventory = Arc::new(RestInventoryAdapter::new(
            config.searchcars_url.clone(),
            timeout,
        )?);

        Ok(Self::with_adapters(config, db, dealers, sentiment, inventory))
    }

    pub fn with_adapters(
        config: Config,
        db: DatabaseConnection,
        dealers: Arc<dyn DealerAdapter>,
        sentiment: Arc<dyn SentimentAdapter>,
        inventory: Arc<dyn InventoryAdapter>,
    ) -> Arc<Self> {
        let session_ttl = config.session_ttl;
        Arc::new(Self {
            config,
            auth: AuthService::new(db.clone(), session_ttl),
            catalog: CatalogService::new(db),
            dealers: DealerAggregator::new(dealers, sentiment, inventory),
        })
    }
}
