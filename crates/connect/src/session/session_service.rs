//! Session service - owns the authenticated-user lifecycle.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, info, warn};

use foliotrack_core::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use foliotrack_core::credentials::{CredentialStore, StoredSession};
use foliotrack_core::errors::{Error, Result};
use foliotrack_core::events::{StoreEvent, StoreEventSink};

use crate::api::{AuthApi, UserApi};

use super::session_model::SessionState;
use super::session_traits::SessionServiceTrait;

#[derive(Default)]
struct SessionInner {
    state: SessionState,
    user: Option<User>,
    error: Option<String>,
}

/// Service owning login, registration, logout, session restore, and the
/// current-user cache.
///
/// All mutation goes through the async operations; readers get cheap cloned
/// snapshots. Durable state (tokens + user snapshot) lives in the credential
/// store shared with the gateway.
pub struct SessionService {
    auth_api: Arc<dyn AuthApi>,
    user_api: Arc<dyn UserApi>,
    credentials: Arc<dyn CredentialStore>,
    events: Arc<dyn StoreEventSink>,
    inner: RwLock<SessionInner>,
}

impl SessionService {
    /// Creates a new SessionService instance
    pub fn new(
        auth_api: Arc<dyn AuthApi>,
        user_api: Arc<dyn UserApi>,
        credentials: Arc<dyn CredentialStore>,
        events: Arc<dyn StoreEventSink>,
    ) -> Self {
        Self {
            auth_api,
            user_api,
            credentials,
            events,
            inner: RwLock::new(SessionInner::default()),
        }
    }

    fn set_state(&self, state: SessionState) {
        self.inner.write().unwrap().state = state;
    }

    fn apply_authenticated(&self, user: User) {
        let mut inner = self.inner.write().unwrap();
        inner.state = SessionState::Authenticated;
        inner.user = Some(user);
        inner.error = None;
    }

    fn apply_anonymous(&self, error: Option<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.state = SessionState::Anonymous;
        inner.user = None;
        inner.error = error;
    }

    fn replace_user(&self, user: User) {
        self.inner.write().unwrap().user = Some(user);
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    async fn restore_session(&self) -> Result<SessionState> {
        if StoredSession::load(self.credentials.as_ref())?.is_none() {
            // No (complete) token pair: anonymous without a network round trip.
            debug!("No stored session to restore");
            self.apply_anonymous(None);
            return Ok(SessionState::Anonymous);
        }

        self.set_state(SessionState::Restoring);
        match self.auth_api.me().await {
            Ok(user) => {
                StoredSession::persist_user(self.credentials.as_ref(), &user)?;
                info!("Restored session for {}", user.email);
                self.apply_authenticated(user);
                self.events
                    .emit(StoreEvent::SessionChanged { authenticated: true });
                Ok(SessionState::Authenticated)
            }
            Err(err) => {
                // Stale or revoked tokens; drop whatever the gateway left
                // behind and start over anonymous.
                warn!("Session restore failed: {}", err);
                self.credentials.clear()?;
                self.apply_anonymous(None);
                Ok(SessionState::Anonymous)
            }
        }
    }

    async fn login(&self, payload: LoginRequest) -> Result<User> {
        payload.validate()?;
        self.set_state(SessionState::Authenticating);

        match self.auth_api.login(&payload).await {
            Ok(response) => {
                // The typed response guarantees a complete user and both
                // tokens; persist them together before exposing the state.
                StoredSession::persist(self.credentials.as_ref(), &response.tokens, &response.user)?;
                info!("Logged in as {}", response.user.email);
                self.apply_authenticated(response.user.clone());
                self.events
                    .emit(StoreEvent::SessionChanged { authenticated: true });
                Ok(response.user)
            }
            Err(err) => {
                self.apply_anonymous(Some(err.to_string()));
                Err(err)
            }
        }
    }

    async fn register(&self, payload: RegisterRequest) -> Result<User> {
        payload.validate()?;
        // Registration never authenticates; the session state is untouched
        // and no tokens are persisted even if the server were to issue them.
        let user = self.auth_api.register(&payload).await?;
        info!("Registered account for {}", user.email);
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        if let Err(err) = self.auth_api.logout().await {
            // Best-effort: the server-side session may already be gone.
            warn!("Logout request failed: {}", err);
        }
        self.credentials.clear()?;
        self.apply_anonymous(None);
        self.events
            .emit(StoreEvent::SessionChanged { authenticated: false });
        Ok(())
    }

    async fn refresh_current_user(&self) -> Result<User> {
        let user = self.auth_api.me().await?;
        StoredSession::persist_user(self.credentials.as_ref(), &user)?;
        self.replace_user(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, payload: UpdateProfileRequest) -> Result<User> {
        let user = self.user_api.update_profile(&payload).await?;
        StoredSession::persist_user(self.credentials.as_ref(), &user)?;
        self.replace_user(user.clone());
        Ok(user)
    }

    async fn change_password(&self, payload: ChangePasswordRequest) -> Result<()> {
        payload.validate().map_err(Error::from)?;
        self.user_api.change_password(&payload).await
    }

    fn invalidate(&self) {
        self.apply_anonymous(None);
        self.events
            .emit(StoreEvent::SessionChanged { authenticated: false });
    }

    fn state(&self) -> SessionState {
        self.inner.read().unwrap().state
    }

    fn user(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap()
            .user
            .clone()
    }

    fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    fn last_error(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .error
            .clone()
    }
}
