//! Client context assembly.
//!
//! Wires the credential store, transport, gateway, endpoint clients, and the
//! three stores into one explicit object. Embedders construct a context at
//! startup and pass it (or its parts) down - there is no process-wide
//! singleton to reach for.

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc;

use foliotrack_core::credentials::CredentialStore;
use foliotrack_core::errors::Result;
use foliotrack_core::events::{ChannelStoreEventSink, StoreEvent, StoreEventSink};

use crate::api::RestApiClient;
use crate::config::ClientConfig;
use crate::credentials::FileCredentialStore;
use crate::http::{Gateway, ReqwestTransport};
use crate::notifications::NotificationStore;
use crate::session::SessionService;
use crate::store::PortfolioStore;

/// Result of context initialization, including the receiver for store events.
pub struct ContextInitResult {
    pub context: ClientContext,
    pub event_receiver: mpsc::UnboundedReceiver<StoreEvent>,
}

/// The assembled client: session, portfolio cache, and notifications over a
/// shared gateway.
///
/// On a [`StoreEvent::SessionInvalidated`] event the embedder should call
/// `context.session.invalidate()` (and route to its login screen); the
/// gateway has already cleared the durable credentials at that point.
pub struct ClientContext {
    pub session: Arc<SessionService>,
    pub portfolios: Arc<PortfolioStore>,
    pub notifications: Arc<NotificationStore>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl ClientContext {
    /// Builds a context from the configuration, returning it together with
    /// the store-event receiver for the UI layer.
    pub fn initialize(config: &ClientConfig) -> Result<ContextInitResult> {
        let (sink, event_receiver) = ChannelStoreEventSink::new();
        let events: Arc<dyn StoreEventSink> = Arc::new(sink);

        let credentials: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(
            config.credentials_path.clone(),
            config.credentials_key.as_deref(),
        )?);

        let context = Self::with_credential_store(config, credentials, events)?;
        Ok(ContextInitResult {
            context,
            event_receiver,
        })
    }

    /// Builds a context over an externally supplied credential store and
    /// event sink (used by tests and embedders with their own persistence).
    pub fn with_credential_store(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        events: Arc<dyn StoreEventSink>,
    ) -> Result<ClientContext> {
        debug!("Initializing client context for {}", config.base_url);

        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        let gateway = Arc::new(Gateway::new(
            config.base_url.clone(),
            transport,
            credentials.clone(),
            events.clone(),
        ));
        let api = Arc::new(RestApiClient::new(gateway));

        let session = Arc::new(SessionService::new(
            api.clone(),
            api.clone(),
            credentials.clone(),
            events.clone(),
        ));
        let portfolios = Arc::new(PortfolioStore::new(
            api.clone(),
            api.clone(),
            api.clone(),
            api.clone(),
            events.clone(),
        ));
        let notifications = Arc::new(NotificationStore::new(events));

        Ok(ClientContext {
            session,
            portfolios,
            notifications,
            credentials,
        })
    }
}
