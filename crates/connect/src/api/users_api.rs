//! User profile endpoints.

use async_trait::async_trait;

use foliotrack_core::auth::{ChangePasswordRequest, UpdateProfileRequest, User, UserStats};
use foliotrack_core::errors::Result;

use crate::endpoints;

use super::RestApiClient;

/// Trait for the user profile endpoints.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Partially updates the profile and returns the updated user.
    async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<User>;

    /// Changes the password. Does not rotate the session tokens.
    async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<()>;

    /// Fetches per-user aggregate statistics.
    async fn stats(&self) -> Result<UserStats>;

    /// Deletes the account after password confirmation.
    async fn delete_account(&self, password: &str) -> Result<()>;
}

#[async_trait]
impl UserApi for RestApiClient {
    async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<User> {
        self.gateway()
            .put(endpoints::USERS_PROFILE, serde_json::to_value(payload)?)
            .await
    }

    async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<()> {
        self.gateway()
            .post_empty(
                endpoints::USERS_CHANGE_PASSWORD,
                Some(serde_json::to_value(payload)?),
            )
            .await
    }

    async fn stats(&self) -> Result<UserStats> {
        self.gateway().get(endpoints::USERS_STATS).await
    }

    async fn delete_account(&self, password: &str) -> Result<()> {
        self.gateway()
            .delete_empty(
                endpoints::USERS_ACCOUNT,
                Some(serde_json::json!({ "password": password })),
            )
            .await
    }
}
