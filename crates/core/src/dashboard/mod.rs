//! Dashboard module - derived aggregate views over portfolios.

mod dashboard_model;

#[cfg(test)]
mod dashboard_model_tests;

// Re-export the public interface
pub use dashboard_model::{gain_loss_percent, DashboardSummary, PortfolioSummary};
