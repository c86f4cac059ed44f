//! Portfolio store trait.

use async_trait::async_trait;

use foliotrack_core::investments::{InvestmentUpdate, NewInvestment};
use foliotrack_core::portfolios::{NewPortfolio, PortfolioUpdate};
use foliotrack_core::transactions::{NewTransaction, TransactionFilter};

use super::store_model::PortfolioStoreState;

/// Trait defining the contract for the portfolio cache store.
///
/// Fetch actions record their outcome in the state (`error` on failure, data
/// replaced on success). Mutating actions additionally return a success flag
/// so callers can chain a notification without inspecting the state.
#[async_trait]
pub trait PortfolioStoreTrait: Send + Sync {
    /// Returns a copy of the current state.
    fn snapshot(&self) -> PortfolioStoreState;

    // Portfolio actions
    async fn fetch_portfolios(&self);
    async fn fetch_portfolio(&self, portfolio_id: &str);
    async fn create_portfolio(&self, payload: NewPortfolio) -> bool;
    async fn update_portfolio(&self, portfolio_id: &str, payload: PortfolioUpdate) -> bool;
    async fn delete_portfolio(&self, portfolio_id: &str) -> bool;

    // Investment actions
    async fn fetch_investments(&self, portfolio_id: &str);
    async fn create_investment(&self, portfolio_id: &str, payload: NewInvestment) -> bool;
    async fn update_investment(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: InvestmentUpdate,
    ) -> bool;
    async fn delete_investment(&self, portfolio_id: &str, investment_id: &str) -> bool;

    // Transaction actions
    async fn fetch_transactions(&self, portfolio_id: &str, filter: TransactionFilter);
    async fn record_transaction(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: NewTransaction,
    ) -> bool;

    // Dashboard actions
    async fn fetch_dashboard_summary(&self);

    // Utility actions
    fn clear_error(&self);
    fn reset(&self);
}
