//! Portfolio cache store.
//!
//! Holds the fetched portfolio list, the selected portfolio with its
//! investments and transactions, and the dashboard summary. Actions are
//! independent async operations with no cross-action ordering: the last
//! response to land wins on `is_loading`/`error`, while appends and
//! removals are applied per entity and are never lost. The server owns ID
//! assignment and conflict resolution.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, warn};

use foliotrack_core::errors::Error;
use foliotrack_core::events::{StoreEvent, StoreEventSink};
use foliotrack_core::investments::{InvestmentUpdate, NewInvestment};
use foliotrack_core::portfolios::{NewPortfolio, PortfolioUpdate};
use foliotrack_core::transactions::{NewTransaction, TransactionFilter};

use crate::api::{DashboardApi, InvestmentApi, PortfolioApi, TransactionApi};

use super::store_model::PortfolioStoreState;
use super::store_traits::PortfolioStoreTrait;

/// Observable in-memory cache of the user's portfolio data.
pub struct PortfolioStore {
    portfolio_api: Arc<dyn PortfolioApi>,
    investment_api: Arc<dyn InvestmentApi>,
    transaction_api: Arc<dyn TransactionApi>,
    dashboard_api: Arc<dyn DashboardApi>,
    events: Arc<dyn StoreEventSink>,
    state: RwLock<PortfolioStoreState>,
}

impl PortfolioStore {
    /// Creates a new PortfolioStore instance
    pub fn new(
        portfolio_api: Arc<dyn PortfolioApi>,
        investment_api: Arc<dyn InvestmentApi>,
        transaction_api: Arc<dyn TransactionApi>,
        dashboard_api: Arc<dyn DashboardApi>,
        events: Arc<dyn StoreEventSink>,
    ) -> Self {
        Self {
            portfolio_api,
            investment_api,
            transaction_api,
            dashboard_api,
            events,
            state: RwLock::new(PortfolioStoreState::default()),
        }
    }

    /// Marks an action in flight: loading set, stale error cleared.
    fn begin(&self) {
        let mut state = self.state.write().unwrap();
        state.is_loading = true;
        state.error = None;
    }

    /// Records a failed action, leaving previously fetched data untouched.
    fn fail(&self, context: &str, err: Error) {
        warn!("{}: {}", context, err);
        let mut state = self.state.write().unwrap();
        state.is_loading = false;
        state.error = Some(err.to_string());
    }

    /// Applies a successful mutation to the state.
    fn finish<F>(&self, apply: F)
    where
        F: FnOnce(&mut PortfolioStoreState),
    {
        let mut state = self.state.write().unwrap();
        apply(&mut state);
        state.is_loading = false;
        state.error = None;
    }
}

#[async_trait]
impl PortfolioStoreTrait for PortfolioStore {
    fn snapshot(&self) -> PortfolioStoreState {
        self.state.read().unwrap().clone()
    }

    async fn fetch_portfolios(&self) {
        self.begin();
        match self.portfolio_api.list().await {
            Ok(portfolios) => {
                debug!("Fetched {} portfolios", portfolios.len());
                let ids: Vec<String> = portfolios.iter().map(|p| p.id.clone()).collect();
                self.finish(|state| state.portfolios = portfolios);
                self.events
                    .emit(StoreEvent::PortfoliosChanged { portfolio_ids: ids });
            }
            Err(err) => self.fail("Failed to fetch portfolios", err),
        }
    }

    async fn fetch_portfolio(&self, portfolio_id: &str) {
        self.begin();
        match self.portfolio_api.get(portfolio_id).await {
            Ok(portfolio) => {
                let id = portfolio.id.clone();
                self.finish(|state| state.current_portfolio = Some(portfolio));
                self.events.emit(StoreEvent::PortfoliosChanged {
                    portfolio_ids: vec![id],
                });
            }
            Err(err) => self.fail("Failed to fetch portfolio", err),
        }
    }

    async fn create_portfolio(&self, payload: NewPortfolio) -> bool {
        if let Err(err) = payload.validate() {
            self.fail("Rejected portfolio payload", err.into());
            return false;
        }
        self.begin();
        match self.portfolio_api.create(&payload).await {
            Ok(portfolio) => {
                // Append to the cached list; no wholesale refetch.
                let id = portfolio.id.clone();
                self.finish(|state| state.portfolios.push(portfolio));
                self.events.emit(StoreEvent::PortfoliosChanged {
                    portfolio_ids: vec![id],
                });
                true
            }
            Err(err) => {
                self.fail("Failed to create portfolio", err);
                false
            }
        }
    }

    async fn update_portfolio(&self, portfolio_id: &str, payload: PortfolioUpdate) -> bool {
        self.begin();
        match self.portfolio_api.update(portfolio_id, &payload).await {
            Ok(updated) => {
                let id = updated.id.clone();
                self.finish(|state| {
                    if let Some(slot) = state.portfolios.iter_mut().find(|p| p.id == updated.id) {
                        *slot = updated.clone();
                    }
                    if state
                        .current_portfolio
                        .as_ref()
                        .is_some_and(|current| current.id == updated.id)
                    {
                        state.current_portfolio = Some(updated);
                    }
                });
                self.events.emit(StoreEvent::PortfoliosChanged {
                    portfolio_ids: vec![id],
                });
                true
            }
            Err(err) => {
                self.fail("Failed to update portfolio", err);
                false
            }
        }
    }

    async fn delete_portfolio(&self, portfolio_id: &str) -> bool {
        self.begin();
        match self.portfolio_api.delete(portfolio_id).await {
            Ok(()) => {
                self.finish(|state| {
                    state.portfolios.retain(|p| p.id != portfolio_id);
                    // Dependent data is invalidated, not left stale.
                    if state
                        .current_portfolio
                        .as_ref()
                        .is_some_and(|current| current.id == portfolio_id)
                    {
                        state.current_portfolio = None;
                        state.investments.clear();
                    }
                });
                self.events.emit(StoreEvent::PortfoliosChanged {
                    portfolio_ids: vec![portfolio_id.to_string()],
                });
                true
            }
            Err(err) => {
                self.fail("Failed to delete portfolio", err);
                false
            }
        }
    }

    async fn fetch_investments(&self, portfolio_id: &str) {
        self.begin();
        match self.investment_api.list(portfolio_id).await {
            Ok(investments) => {
                debug!(
                    "Fetched {} investments for {}",
                    investments.len(),
                    portfolio_id
                );
                self.finish(|state| state.investments = investments);
                self.events.emit(StoreEvent::InvestmentsChanged {
                    portfolio_id: portfolio_id.to_string(),
                });
            }
            Err(err) => self.fail("Failed to fetch investments", err),
        }
    }

    async fn create_investment(&self, portfolio_id: &str, payload: NewInvestment) -> bool {
        if let Err(err) = payload.validate() {
            self.fail("Rejected investment payload", err.into());
            return false;
        }
        self.begin();
        match self.investment_api.create(portfolio_id, &payload).await {
            Ok(investment) => {
                self.finish(|state| state.investments.push(investment));
                self.events.emit(StoreEvent::InvestmentsChanged {
                    portfolio_id: portfolio_id.to_string(),
                });
                true
            }
            Err(err) => {
                self.fail("Failed to create investment", err);
                false
            }
        }
    }

    async fn update_investment(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: InvestmentUpdate,
    ) -> bool {
        self.begin();
        match self
            .investment_api
            .update(portfolio_id, investment_id, &payload)
            .await
        {
            Ok(updated) => {
                self.finish(|state| {
                    if let Some(slot) = state.investments.iter_mut().find(|i| i.id == updated.id) {
                        *slot = updated;
                    }
                });
                self.events.emit(StoreEvent::InvestmentsChanged {
                    portfolio_id: portfolio_id.to_string(),
                });
                true
            }
            Err(err) => {
                self.fail("Failed to update investment", err);
                false
            }
        }
    }

    async fn delete_investment(&self, portfolio_id: &str, investment_id: &str) -> bool {
        self.begin();
        match self
            .investment_api
            .delete(portfolio_id, investment_id)
            .await
        {
            Ok(()) => {
                self.finish(|state| state.investments.retain(|i| i.id != investment_id));
                self.events.emit(StoreEvent::InvestmentsChanged {
                    portfolio_id: portfolio_id.to_string(),
                });
                true
            }
            Err(err) => {
                self.fail("Failed to delete investment", err);
                false
            }
        }
    }

    async fn fetch_transactions(&self, portfolio_id: &str, filter: TransactionFilter) {
        self.begin();
        match self.transaction_api.list(portfolio_id, &filter).await {
            Ok(transactions) => {
                self.finish(|state| state.transactions = transactions);
                self.events.emit(StoreEvent::TransactionsRecorded {
                    portfolio_id: portfolio_id.to_string(),
                });
            }
            Err(err) => self.fail("Failed to fetch transactions", err),
        }
    }

    async fn record_transaction(
        &self,
        portfolio_id: &str,
        investment_id: &str,
        payload: NewTransaction,
    ) -> bool {
        if let Err(err) = payload.validate() {
            self.fail("Rejected transaction payload", err.into());
            return false;
        }
        self.begin();
        match self
            .transaction_api
            .record(portfolio_id, investment_id, &payload)
            .await
        {
            Ok(transaction) => {
                self.finish(|state| state.transactions.push(transaction));
                self.events.emit(StoreEvent::TransactionsRecorded {
                    portfolio_id: portfolio_id.to_string(),
                });
                true
            }
            Err(err) => {
                self.fail("Failed to record transaction", err);
                false
            }
        }
    }

    async fn fetch_dashboard_summary(&self) {
        self.begin();
        // Always a full refresh; the summary is never patched together from
        // other store fields.
        match self.dashboard_api.summary().await {
            Ok(summary) => {
                self.finish(|state| state.dashboard_summary = Some(summary));
                self.events.emit(StoreEvent::DashboardRefreshed);
            }
            Err(err) => self.fail("Failed to fetch dashboard summary", err),
        }
    }

    fn clear_error(&self) {
        self.state.write().unwrap().error = None;
    }

    fn reset(&self) {
        let mut state = self.state.write().unwrap();
        *state = PortfolioStoreState::default();
    }
}
