//! Foliotrack Connect - REST client runtime for the Foliotrack tracker.
//!
//! This crate provides everything that talks to the tracker backend: the
//! HTTP gateway with its one-shot token-refresh interceptor, typed endpoint
//! clients, the session service, the portfolio cache store, the notification
//! store, and the durable credential file. The pieces are wired together by
//! [`ClientContext`], which replaces any process-wide singleton state.

pub mod api;
pub mod config;
pub mod context;
pub mod credentials;
pub mod endpoints;
pub mod http;
pub mod notifications;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use api::{
    AuthApi, DashboardApi, InvestmentApi, PortfolioApi, RestApiClient, TransactionApi, UserApi,
};
pub use config::ClientConfig;
pub use context::ClientContext;
pub use credentials::FileCredentialStore;
pub use http::{Gateway, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use notifications::{Notification, NotificationLevel, NotificationStore};
pub use session::{SessionService, SessionServiceTrait, SessionState};
pub use store::{PortfolioStore, PortfolioStoreState, PortfolioStoreTrait};
