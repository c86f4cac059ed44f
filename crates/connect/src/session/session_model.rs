//! Session domain models.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the authenticated-user session.
///
/// Transitions: `Anonymous -> Authenticating -> Authenticated -> Anonymous`
/// (on logout or invalidation), with `Restoring` as a transient startup state
/// while stored tokens are being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    #[default]
    Anonymous,
    Restoring,
    Authenticating,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}
