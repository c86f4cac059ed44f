//! Typed view over the stored session credentials.

use crate::auth::{AuthTokens, User};
use crate::errors::Result;

use super::credentials_constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use super::credentials_traits::CredentialStore;

/// The durable slice of a session: both tokens plus the last user snapshot.
///
/// Absence of either token means "no session" - a lone access or refresh
/// token is never treated as a restorable state.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub tokens: AuthTokens,
    pub user: Option<User>,
}

impl StoredSession {
    /// Loads the stored session, or `None` when either token is missing.
    ///
    /// A corrupt user snapshot is dropped rather than failing the load; the
    /// session service refetches the user during restore anyway.
    pub fn load(store: &dyn CredentialStore) -> Result<Option<StoredSession>> {
        let access_token = store.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = store.get(REFRESH_TOKEN_KEY)?;
        let (Some(access_token), Some(refresh_token)) = (access_token, refresh_token) else {
            return Ok(None);
        };
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("Discarding unreadable stored user snapshot: {}", err);
                    None
                }
            },
            None => None,
        };
        Ok(Some(StoredSession {
            tokens: AuthTokens {
                access_token,
                refresh_token,
            },
            user,
        }))
    }

    /// Persists both tokens and the user snapshot.
    pub fn persist(store: &dyn CredentialStore, tokens: &AuthTokens, user: &User) -> Result<()> {
        store.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
        store.set(USER_KEY, &serde_json::to_string(user)?)
    }

    /// Replaces only the persisted user snapshot, leaving tokens untouched.
    pub fn persist_user(store: &dyn CredentialStore, user: &User) -> Result<()> {
        store.set(USER_KEY, &serde_json::to_string(user)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::credentials::MemoryCredentialStore;

    fn test_user() -> User {
        User {
            id: "usr-1".to_string(),
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
        }
    }

    #[test]
    fn test_load_requires_both_tokens() {
        let store = MemoryCredentialStore::default();
        assert_eq!(StoredSession::load(&store).unwrap(), None);

        store.set(ACCESS_TOKEN_KEY, "acc").unwrap();
        assert_eq!(StoredSession::load(&store).unwrap(), None);

        store.set(REFRESH_TOKEN_KEY, "ref").unwrap();
        let loaded = StoredSession::load(&store).unwrap().unwrap();
        assert_eq!(loaded.tokens, tokens());
        assert_eq!(loaded.user, None);
    }

    #[test]
    fn test_persist_and_load_round_trip() {
        let store = MemoryCredentialStore::default();
        StoredSession::persist(&store, &tokens(), &test_user()).unwrap();

        let loaded = StoredSession::load(&store).unwrap().unwrap();
        assert_eq!(loaded.tokens, tokens());
        assert_eq!(loaded.user, Some(test_user()));
    }

    #[test]
    fn test_corrupt_user_snapshot_is_dropped() {
        let store = MemoryCredentialStore::default();
        StoredSession::persist(&store, &tokens(), &test_user()).unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let loaded = StoredSession::load(&store).unwrap().unwrap();
        assert_eq!(loaded.user, None);
    }
}
