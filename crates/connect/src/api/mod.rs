//! API module - typed endpoint clients over the gateway.
//!
//! Each domain exposes a small trait so services and stores can be tested
//! against in-memory fakes; [`RestApiClient`] implements all of them against
//! the real backend.

mod auth_api;
mod dashboard_api;
mod investments_api;
mod portfolios_api;
mod transactions_api;
mod users_api;

use std::sync::Arc;

use crate::http::Gateway;

pub use auth_api::AuthApi;
pub use dashboard_api::DashboardApi;
pub use investments_api::InvestmentApi;
pub use portfolios_api::PortfolioApi;
pub use transactions_api::TransactionApi;
pub use users_api::UserApi;

/// REST implementation of every endpoint client trait.
pub struct RestApiClient {
    gateway: Arc<Gateway>,
}

impl RestApiClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub(crate) fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}
