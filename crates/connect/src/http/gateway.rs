//! HTTP gateway - the single choke point for all backend calls.
//!
//! The gateway attaches the stored bearer credential to every request and
//! implements the one-shot refresh-and-retry protocol on authorization
//! failure. The retry budget is an explicit per-call attempt counter, never
//! shared mutable request state, so a request can be retried at most once
//! and a refresh can never recurse into itself.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use foliotrack_core::auth::RefreshedTokens;
use foliotrack_core::credentials::{
    CredentialStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
use foliotrack_core::errors::{Error, Result};
use foliotrack_core::events::{StoreEvent, StoreEventSink};

use crate::endpoints;

use super::envelope;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct Gateway {
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    events: Arc<dyn StoreEventSink>,
    base_url: String,
}

impl Gateway {
    /// Creates a new gateway.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the tracker API (e.g. "http://localhost:3000")
    /// * `transport` - The HTTP transport used for every call
    /// * `credentials` - Durable storage for tokens and the user snapshot
    /// * `events` - Sink notified when the session is invalidated
    pub fn new(
        base_url: String,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
        events: Arc<dyn StoreEventSink>,
    ) -> Self {
        Self {
            transport,
            credentials,
            events,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<T: serde::de::DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete_empty(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.request_empty(HttpMethod::Delete, path, body).await
    }

    pub async fn post_empty(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.request_empty(HttpMethod::Post, path, body).await
    }

    /// Issues a request and decodes the envelope's `data` payload.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        envelope::parse(&response).map_err(Error::from)
    }

    /// Issues a request for an endpoint whose envelope carries no data.
    pub async fn request_empty(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<()> {
        let response = self.send(method, path, body).await?;
        envelope::parse_empty(&response).map_err(Error::from)
    }

    /// Executes the request with the one-shot refresh-and-retry protocol.
    ///
    /// Returns the final response for the caller to parse; only transport
    /// failures and refresh failures surface as errors here.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse> {
        let url = self.url(path);
        let mut attempt: u8 = 0;
        loop {
            let bearer = self.credentials.get(ACCESS_TOKEN_KEY)?;
            let response = self
                .transport
                .execute(HttpRequest {
                    method,
                    url: url.clone(),
                    body: body.clone(),
                    bearer,
                })
                .await
                .map_err(Error::Api)?;

            if !response.is_unauthorized() {
                return Ok(response);
            }

            if attempt > 0 {
                // The retried request was rejected too; the refreshed token
                // is no good either.
                self.invalidate_session();
                return Err(Error::SessionInvalid(
                    "Request was rejected again after a token refresh".to_string(),
                ));
            }
            attempt += 1;

            match self.credentials.get(REFRESH_TOKEN_KEY)? {
                None => {
                    // Nothing to refresh with: fail the original request with
                    // its own 401 envelope so callers see the server message.
                    self.invalidate_session();
                    return Ok(response);
                }
                Some(refresh_token) => {
                    debug!("Received 401 for {} {}, refreshing token", method.as_str(), path);
                    self.refresh_access_token(&refresh_token).await?;
                }
            }
        }
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// Goes straight through the transport, bypassing `send`, so a 401 from
    /// the refresh endpoint can never trigger another refresh.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<()> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.url(endpoints::AUTH_REFRESH_TOKEN),
            body: Some(serde_json::json!({})),
            bearer: Some(refresh_token.to_string()),
        };

        let refreshed = match self.transport.execute(request).await {
            Ok(response) => envelope::parse::<RefreshedTokens>(&response),
            Err(network) => Err(network),
        };

        match refreshed {
            Ok(tokens) => {
                self.credentials.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
                if let Some(new_refresh_token) = &tokens.refresh_token {
                    self.credentials.set(REFRESH_TOKEN_KEY, new_refresh_token)?;
                }
                debug!("Token refresh succeeded");
                Ok(())
            }
            Err(err) => {
                self.invalidate_session();
                Err(Error::SessionInvalid(format!(
                    "Token refresh failed: {}",
                    err
                )))
            }
        }
    }

    /// Clears stored credentials and signals the session loss.
    fn invalidate_session(&self) {
        warn!("Session invalidated, clearing stored credentials");
        if let Err(err) = self.credentials.clear() {
            warn!("Failed to clear credential store: {}", err);
        }
        self.events.emit(StoreEvent::SessionInvalidated);
    }
}
