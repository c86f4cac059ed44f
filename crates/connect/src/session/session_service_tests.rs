//! Tests for the session lifecycle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use foliotrack_core::auth::{
    AuthResponse, AuthTokens, ChangePasswordRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest, User, UserStats,
};
use foliotrack_core::credentials::{
    CredentialStore, MemoryCredentialStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY,
};
use foliotrack_core::errors::{ApiError, Error, Result};
use foliotrack_core::events::{MockStoreEventSink, StoreEvent};

use crate::api::{AuthApi, UserApi};

use super::session_model::SessionState;
use super::session_service::SessionService;
use super::session_traits::SessionServiceTrait;

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

fn unauthorized() -> Error {
    Error::Api(ApiError::Status {
        status_code: 401,
        message: "Invalid credentials".to_string(),
        errors: Vec::new(),
    })
}

/// Backend fake with per-operation scripted outcomes and call counters.
#[derive(Default)]
struct MockBackend {
    login_response: Mutex<Option<Result<AuthResponse>>>,
    register_response: Mutex<Option<Result<User>>>,
    me_response: Mutex<Option<Result<User>>>,
    logout_response: Mutex<Option<Result<()>>>,
    update_profile_response: Mutex<Option<Result<User>>>,
    change_password_response: Mutex<Option<Result<()>>>,
    me_calls: AtomicUsize,
    change_password_calls: AtomicUsize,
}

impl MockBackend {
    fn take<T>(slot: &Mutex<Option<Result<T>>>, operation: &str) -> Result<T> {
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| panic!("no scripted response for {}", operation))
    }
}

#[async_trait]
impl AuthApi for MockBackend {
    async fn register(&self, _payload: &RegisterRequest) -> Result<User> {
        Self::take(&self.register_response, "register")
    }

    async fn login(&self, _payload: &LoginRequest) -> Result<AuthResponse> {
        Self::take(&self.login_response, "login")
    }

    async fn logout(&self) -> Result<()> {
        Self::take(&self.logout_response, "logout")
    }

    async fn me(&self) -> Result<User> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.me_response, "me")
    }
}

#[async_trait]
impl UserApi for MockBackend {
    async fn update_profile(&self, _payload: &UpdateProfileRequest) -> Result<User> {
        Self::take(&self.update_profile_response, "update_profile")
    }

    async fn change_password(&self, _payload: &ChangePasswordRequest) -> Result<()> {
        self.change_password_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.change_password_response, "change_password")
    }

    async fn stats(&self) -> Result<UserStats> {
        panic!("stats is not used by the session service")
    }

    async fn delete_account(&self, _password: &str) -> Result<()> {
        panic!("delete_account is not used by the session service")
    }
}

struct Fixture {
    backend: Arc<MockBackend>,
    credentials: Arc<MemoryCredentialStore>,
    events: MockStoreEventSink,
    service: SessionService,
}

fn fixture() -> Fixture {
    let backend = Arc::new(MockBackend::default());
    let credentials = Arc::new(MemoryCredentialStore::new());
    let events = MockStoreEventSink::new();
    let service = SessionService::new(
        backend.clone(),
        backend.clone(),
        credentials.clone(),
        Arc::new(events.clone()),
    );
    Fixture {
        backend,
        credentials,
        events,
        service,
    }
}

fn login_payload() -> LoginRequest {
    LoginRequest {
        email: "jane@example.com".to_string(),
        password: "Str0ng!pass".to_string(),
    }
}

#[tokio::test]
async fn test_restore_without_tokens_is_anonymous_and_offline() {
    let fx = fixture();

    let state = fx.service.restore_session().await.unwrap();

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(fx.backend.me_calls.load(Ordering::SeqCst), 0);
    assert!(!fx.service.is_authenticated());
}

#[tokio::test]
async fn test_restore_with_single_token_is_anonymous_and_offline() {
    let fx = fixture();
    fx.credentials.set(ACCESS_TOKEN_KEY, "acc").unwrap();

    let state = fx.service.restore_session().await.unwrap();

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(fx.backend.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_restore_with_valid_tokens_authenticates() {
    let fx = fixture();
    fx.credentials.set(ACCESS_TOKEN_KEY, "acc").unwrap();
    fx.credentials.set(REFRESH_TOKEN_KEY, "ref").unwrap();
    *fx.backend.me_response.lock().unwrap() = Some(Ok(test_user()));

    let state = fx.service.restore_session().await.unwrap();

    assert_eq!(state, SessionState::Authenticated);
    assert_eq!(fx.service.user(), Some(test_user()));
    assert_eq!(
        fx.events.events(),
        vec![StoreEvent::SessionChanged { authenticated: true }]
    );
    // The snapshot was refreshed from the live response.
    assert!(fx.credentials.get(USER_KEY).unwrap().is_some());
}

#[tokio::test]
async fn test_restore_failure_clears_storage() {
    let fx = fixture();
    fx.credentials.set(ACCESS_TOKEN_KEY, "acc").unwrap();
    fx.credentials.set(REFRESH_TOKEN_KEY, "ref").unwrap();
    *fx.backend.me_response.lock().unwrap() = Some(Err(unauthorized()));

    let state = fx.service.restore_session().await.unwrap();

    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.credentials.get(REFRESH_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.service.user(), None);
}

#[tokio::test]
async fn test_login_persists_tokens_and_user() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Ok(AuthResponse {
        user: test_user(),
        tokens: tokens(),
    }));

    let user = fx.service.login(login_payload()).await.unwrap();

    assert_eq!(user, test_user());
    assert!(fx.service.is_authenticated());
    assert_eq!(
        fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(),
        Some("acc".to_string())
    );
    assert_eq!(
        fx.credentials.get(REFRESH_TOKEN_KEY).unwrap(),
        Some("ref".to_string())
    );
    let snapshot: User =
        serde_json::from_str(&fx.credentials.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(snapshot, test_user());
    assert_eq!(
        fx.events.events(),
        vec![StoreEvent::SessionChanged { authenticated: true }]
    );
}

#[tokio::test]
async fn test_failed_login_keeps_anonymous_and_persists_nothing() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Err(unauthorized()));

    let err = fx.service.login(login_payload()).await.unwrap_err();

    assert!(matches!(err, Error::Api(_)));
    assert_eq!(fx.service.state(), SessionState::Anonymous);
    assert!(!fx.service.is_authenticated());
    assert_eq!(fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.credentials.get(USER_KEY).unwrap(), None);
    assert_eq!(
        fx.service.last_error(),
        Some("Invalid credentials".to_string())
    );
    assert!(fx.events.is_empty());
}

#[tokio::test]
async fn test_login_rejects_invalid_payload_before_network() {
    let fx = fixture();
    // No scripted response: a network call would panic the mock.

    let err = fx
        .service
        .login(LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(fx.service.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_register_never_authenticates() {
    let fx = fixture();
    *fx.backend.register_response.lock().unwrap() = Some(Ok(test_user()));

    let user = fx
        .service
        .register(RegisterRequest {
            email: "jane@example.com".to_string(),
            password: "Str0ng!pass".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: None,
        })
        .await
        .unwrap();

    assert_eq!(user, test_user());
    // The caller is expected to log in explicitly afterwards.
    assert_eq!(fx.service.state(), SessionState::Anonymous);
    assert_eq!(fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.credentials.get(REFRESH_TOKEN_KEY).unwrap(), None);
    assert!(fx.events.is_empty());
}

#[tokio::test]
async fn test_logout_clears_state_even_when_request_fails() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Ok(AuthResponse {
        user: test_user(),
        tokens: tokens(),
    }));
    fx.service.login(login_payload()).await.unwrap();

    *fx.backend.logout_response.lock().unwrap() = Some(Err(Error::Api(ApiError::Network(
        "connection refused".to_string(),
    ))));

    fx.service.logout().await.unwrap();

    assert_eq!(fx.service.state(), SessionState::Anonymous);
    assert_eq!(fx.service.user(), None);
    assert_eq!(fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.credentials.get(REFRESH_TOKEN_KEY).unwrap(), None);
    assert_eq!(fx.credentials.get(USER_KEY).unwrap(), None);
    assert_eq!(
        fx.events.events().last(),
        Some(&StoreEvent::SessionChanged { authenticated: false })
    );
}

#[tokio::test]
async fn test_change_password_rejects_identical_values_offline() {
    let fx = fixture();

    let err = fx
        .service
        .change_password(ChangePasswordRequest {
            current_password: "Str0ng!pass".to_string(),
            new_password: "Str0ng!pass".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(fx.backend.change_password_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_change_password_success_keeps_session() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Ok(AuthResponse {
        user: test_user(),
        tokens: tokens(),
    }));
    fx.service.login(login_payload()).await.unwrap();
    *fx.backend.change_password_response.lock().unwrap() = Some(Ok(()));

    fx.service
        .change_password(ChangePasswordRequest {
            current_password: "Old!pass123".to_string(),
            new_password: "New!pass456".to_string(),
        })
        .await
        .unwrap();

    // Tokens and authenticated state are untouched.
    assert!(fx.service.is_authenticated());
    assert_eq!(
        fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(),
        Some("acc".to_string())
    );
}

#[tokio::test]
async fn test_update_profile_replaces_user_and_snapshot() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Ok(AuthResponse {
        user: test_user(),
        tokens: tokens(),
    }));
    fx.service.login(login_payload()).await.unwrap();

    let mut renamed = test_user();
    renamed.first_name = "Janet".to_string();
    *fx.backend.update_profile_response.lock().unwrap() = Some(Ok(renamed.clone()));

    let updated = fx
        .service
        .update_profile(UpdateProfileRequest {
            first_name: Some("Janet".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Janet");
    assert_eq!(fx.service.user(), Some(renamed.clone()));
    let snapshot: User =
        serde_json::from_str(&fx.credentials.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(snapshot, renamed);
    // Tokens were not rotated by the profile update.
    assert_eq!(
        fx.credentials.get(ACCESS_TOKEN_KEY).unwrap(),
        Some("acc".to_string())
    );
}

#[tokio::test]
async fn test_invalidate_resets_in_memory_state() {
    let fx = fixture();
    *fx.backend.login_response.lock().unwrap() = Some(Ok(AuthResponse {
        user: test_user(),
        tokens: tokens(),
    }));
    fx.service.login(login_payload()).await.unwrap();

    fx.service.invalidate();

    assert_eq!(fx.service.state(), SessionState::Anonymous);
    assert_eq!(fx.service.user(), None);
}
