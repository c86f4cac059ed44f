//! Portfolio CRUD endpoints.

use async_trait::async_trait;

use foliotrack_core::errors::Result;
use foliotrack_core::portfolios::{NewPortfolio, Portfolio, PortfolioUpdate};

use crate::endpoints;

use super::RestApiClient;

/// Trait for the portfolio CRUD endpoints.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Portfolio>>;
    async fn get(&self, portfolio_id: &str) -> Result<Portfolio>;
    async fn create(&self, payload: &NewPortfolio) -> Result<Portfolio>;
    async fn update(&self, portfolio_id: &str, payload: &PortfolioUpdate) -> Result<Portfolio>;
    async fn delete(&self, portfolio_id: &str) -> Result<()>;
}

#[async_trait]
impl PortfolioApi for RestApiClient {
    async fn list(&self) -> Result<Vec<Portfolio>> {
        self.gateway().get(endpoints::PORTFOLIOS).await
    }

    async fn get(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.gateway().get(&endpoints::portfolio(portfolio_id)).await
    }

    async fn create(&self, payload: &NewPortfolio) -> Result<Portfolio> {
        self.gateway()
            .post(endpoints::PORTFOLIOS, serde_json::to_value(payload)?)
            .await
    }

    async fn update(&self, portfolio_id: &str, payload: &PortfolioUpdate) -> Result<Portfolio> {
        self.gateway()
            .put(
                &endpoints::portfolio(portfolio_id),
                serde_json::to_value(payload)?,
            )
            .await
    }

    async fn delete(&self, portfolio_id: &str) -> Result<()> {
        self.gateway()
            .delete_empty(&endpoints::portfolio(portfolio_id), None)
            .await
    }
}
