//! Derived dashboard aggregates.
//!
//! These views are recomputed from portfolio and investment data, never
//! independently mutated. The store always refreshes the summary wholesale
//! from the backend; the local aggregation here backs display helpers and
//! keeps the math in one place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::Investment;
use crate::portfolios::Portfolio;

/// Gain as a percentage of the invested amount.
///
/// `None` when nothing is invested; callers must guard before display.
pub fn gain_loss_percent(invested: Decimal, gain_loss: Decimal) -> Option<Decimal> {
    if invested.is_zero() {
        return None;
    }
    Some(gain_loss / invested * Decimal::ONE_HUNDRED)
}

/// Aggregate view of a single portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub total_invested_amount: Decimal,
    pub total_current_value: Decimal,
    pub total_gain_loss: Decimal,
    #[serde(default)]
    pub gain_loss_percentage: Option<Decimal>,
    pub number_of_investments: u32,
}

impl PortfolioSummary {
    /// Builds the summary for a portfolio from its investments.
    ///
    /// Invariants: invested = Σ purchase_price × quantity,
    /// value = Σ current_price × quantity, gain = value − invested.
    pub fn for_investments(portfolio: &Portfolio, investments: &[Investment]) -> Self {
        let total_invested_amount: Decimal = investments.iter().map(Investment::cost_basis).sum();
        let total_current_value: Decimal = investments.iter().map(Investment::market_value).sum();
        let total_gain_loss = total_current_value - total_invested_amount;
        Self {
            portfolio_id: portfolio.id.clone(),
            portfolio_name: portfolio.name.clone(),
            total_invested_amount,
            total_current_value,
            total_gain_loss,
            gain_loss_percentage: gain_loss_percent(total_invested_amount, total_gain_loss),
            number_of_investments: investments.len() as u32,
        }
    }
}

/// Aggregate view across all of a user's portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_portfolios: u32,
    pub total_invested_amount: Decimal,
    pub total_current_value: Decimal,
    pub total_gain_loss: Decimal,
    #[serde(default)]
    pub overall_gain_loss_percentage: Option<Decimal>,
    pub portfolios: Vec<PortfolioSummary>,
}

impl DashboardSummary {
    /// Recomputes the overall totals from per-portfolio breakdowns.
    pub fn aggregate(portfolios: Vec<PortfolioSummary>) -> Self {
        let total_invested_amount: Decimal =
            portfolios.iter().map(|p| p.total_invested_amount).sum();
        let total_current_value: Decimal =
            portfolios.iter().map(|p| p.total_current_value).sum();
        let total_gain_loss = total_current_value - total_invested_amount;
        Self {
            total_portfolios: portfolios.len() as u32,
            total_invested_amount,
            total_current_value,
            total_gain_loss,
            overall_gain_loss_percentage: gain_loss_percent(total_invested_amount, total_gain_loss),
            portfolios,
        }
    }
}
