use std::sync::Arc;
use std::time::Duration;

use sea_orm::prelude::*;
use shared::entity::quotes;
use shared::models::CurrencyQuote;
use tokio::time::timeout;

use crate::error::PersistError;

pub struct QuoteRepository {
    db: Arc<DatabaseConnection>,
}

impl QuoteRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert one quote row within `deadline`. Expiry drops the in-flight
    /// insert and surfaces as `PersistError::DeadlineExceeded`.
    pub async fn insert(
        &self,
        quote: CurrencyQuote,
        deadline: Duration,
    ) -> Result<quotes::Model, PersistError> {
        let insert = quotes::Entity::insert(quotes::ActiveModel::from(quote))
            .exec_with_returning(self.db.as_ref());

        let row = timeout(deadline, insert)
            .await
            .map_err(|_| PersistError::DeadlineExceeded)??;
        Ok(row)
    }
}
