//! Dashboard endpoints.

use async_trait::async_trait;

use foliotrack_core::dashboard::DashboardSummary;
use foliotrack_core::errors::Result;

use crate::endpoints;

use super::RestApiClient;

/// Trait for the dashboard aggregate endpoints.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetches the aggregate view across all portfolios.
    async fn summary(&self) -> Result<DashboardSummary>;
}

#[async_trait]
impl DashboardApi for RestApiClient {
    async fn summary(&self) -> Result<DashboardSummary> {
        self.gateway().get(endpoints::DASHBOARD_SUMMARY).await
    }
}
