use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use shared::Config;

use crate::repositories::quote_repository::QuoteRepository;
use crate::services::exchange::ExchangeApiClient;

/// Budget for inserting one fetched quote. Known-tight: a slow disk write
/// misses it and the request answers 500. Deliberately not widened.
pub const PERSIST_DEADLINE: Duration = Duration::from_millis(10);

#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<ExchangeApiClient>,
    pub quotes: Arc<QuoteRepository>,
    pub persist_deadline: Duration,
}

impl AppState {
    pub fn new(config: &Config, db: DatabaseConnection) -> Self {
        AppState {
            exchange: Arc::new(ExchangeApiClient::new(config.exchange_api_url.clone())),
            quotes: Arc::new(QuoteRepository::new(Arc::new(db))),
            persist_deadline: PERSIST_DEADLINE,
        }
    }
}
