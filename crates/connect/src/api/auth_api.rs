//! Authentication endpoints.

use async_trait::async_trait;

use foliotrack_core::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
use foliotrack_core::errors::Result;

use crate::endpoints;

use super::RestApiClient;

/// Trait for the authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Creates an account. Registration never authenticates: the response
    /// carries the created user only, and callers log in explicitly.
    async fn register(&self, payload: &RegisterRequest) -> Result<User>;

    /// Authenticates and returns the complete user record plus both tokens.
    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse>;

    /// Invalidates the server-side session.
    async fn logout(&self) -> Result<()>;

    /// Fetches the currently authenticated user.
    async fn me(&self) -> Result<User>;
}

#[async_trait]
impl AuthApi for RestApiClient {
    async fn register(&self, payload: &RegisterRequest) -> Result<User> {
        self.gateway()
            .post(endpoints::AUTH_REGISTER, serde_json::to_value(payload)?)
            .await
    }

    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse> {
        self.gateway()
            .post(endpoints::AUTH_LOGIN, serde_json::to_value(payload)?)
            .await
    }

    async fn logout(&self) -> Result<()> {
        self.gateway()
            .post_empty(endpoints::AUTH_LOGOUT, Some(serde_json::json!({})))
            .await
    }

    async fn me(&self) -> Result<User> {
        self.gateway().get(endpoints::AUTH_CURRENT_USER).await
    }
}
