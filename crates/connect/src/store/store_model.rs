//! Portfolio store state.

use serde::Serialize;

use foliotrack_core::dashboard::DashboardSummary;
use foliotrack_core::investments::Investment;
use foliotrack_core::portfolios::Portfolio;
use foliotrack_core::transactions::Transaction;

/// Snapshot of the portfolio cache.
///
/// Consumers read this as a value; all mutation happens through the store's
/// action methods. `investments` and `transactions` always belong to
/// `current_portfolio` and are invalidated together with it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStoreState {
    pub portfolios: Vec<Portfolio>,
    pub current_portfolio: Option<Portfolio>,
    pub investments: Vec<Investment>,
    pub transactions: Vec<Transaction>,
    pub dashboard_summary: Option<DashboardSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}
