//! Investment CRUD endpoints.

use async_trait::async_trait;

use foliotrack_core::errors::Result;
use foliotrack_core::investments::{Investment, InvestmentUpdate, NewInvestment};

use crate::endpoints;

use super::RestApiClient;

/// Trait for the investment CRUD endpoints.
#[async_trait]
pub trait InvestmentApi: Send + Sync {
    async fn list(&self, portfolio_id: &str) -> Result<Vec<Investment>>;
    async fn create(&self, portfolio_id: &str, payload: &NewInvestment) -> Result<Investment>;
    async fn update(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: &InvestmentUpdate,
    ) -> Result<Investment>;
    async fn delete(&self, portfolio_id: &str, investment_id: &str) -> Result<()>;
}

#[async_trait]
impl InvestmentApi for RestApiClient {
    async fn list(&self, portfolio_id: &str) -> Result<Vec<Investment>> {
        self.gateway().get(&endpoints::investments(portfolio_id)).await
    }

    async fn create(&self, portfolio_id: &str, payload: &NewInvestment) -> Result<Investment> {
        self.gateway()
            .post(
                &endpoints::investments(portfolio_id),
                serde_json::to_value(payload)?,
            )
            .await
    }

    async fn update(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: &InvestmentUpdate,
    ) -> Result<Investment> {
        self.gateway()
            .put(
                &endpoints::investment(portfolio_id, investment_id),
                serde_json::to_value(payload)?,
            )
            .await
    }

    async fn delete(&self, portfolio_id: &str, investment_id: &str) -> Result<()> {
        self.gateway()
            .delete_empty(&endpoints::investment(portfolio_id, investment_id), None)
            .await
    }
}
