//! Session service trait.
//!
//! The trait defines the contract for the session lifecycle without tying
//! consumers to the REST-backed implementation.

use async_trait::async_trait;

use foliotrack_core::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use foliotrack_core::errors::Result;

use super::session_model::SessionState;

/// Trait defining the contract for session lifecycle operations.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// Restores a persisted session at startup.
    ///
    /// When either token is missing this resolves synchronously to
    /// `Anonymous` without touching the network.
    async fn restore_session(&self) -> Result<SessionState>;

    /// Authenticates and persists the session. On failure no partial state
    /// is kept.
    async fn login(&self, payload: LoginRequest) -> Result<User>;

    /// Creates an account. Never authenticates the caller; a subsequent
    /// explicit `login` is required.
    async fn register(&self, payload: RegisterRequest) -> Result<User>;

    /// Logs out. The server call is best-effort; local state is always
    /// cleared.
    async fn logout(&self) -> Result<()>;

    /// Refetches the current user and replaces the cached snapshot.
    async fn refresh_current_user(&self) -> Result<User>;

    /// Updates profile fields; tokens are untouched.
    async fn update_profile(&self, payload: UpdateProfileRequest) -> Result<User>;

    /// Changes the password. Rejects `current == new` before any network
    /// call; a success does not rotate the session tokens.
    async fn change_password(&self, payload: ChangePasswordRequest) -> Result<()>;

    /// Resets in-memory state after the gateway invalidated the session.
    fn invalidate(&self);

    /// Current lifecycle state.
    fn state(&self) -> SessionState;

    /// The cached user, when authenticated.
    fn user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool;

    /// Message of the last failed operation, for the UI layer.
    fn last_error(&self) -> Option<String>;
}
