//! Transaction endpoints.

use async_trait::async_trait;

use foliotrack_core::errors::Result;
use foliotrack_core::transactions::{NewTransaction, Transaction, TransactionFilter};

use crate::endpoints;

use super::RestApiClient;

/// Trait for the transaction endpoints.
///
/// Transactions are append-only: there is no update operation.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    async fn record(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: &NewTransaction,
    ) -> Result<Transaction>;

    /// Lists a portfolio's transactions; the filter is applied server-side.
    async fn list(
        &self,
        portfolio_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>>;
}

#[async_trait]
impl TransactionApi for RestApiClient {
    async fn record(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: &NewTransaction,
    ) -> Result<Transaction> {
        self.gateway()
            .post(
                &endpoints::investment_transactions(portfolio_id, investment_id),
                serde_json::to_value(payload)?,
            )
            .await
    }

    async fn list(
        &self,
        portfolio_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        self.gateway()
            .get(&endpoints::portfolio_transactions(portfolio_id, filter))
            .await
    }
}
