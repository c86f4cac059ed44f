//! Response envelope parsing.
//!
//! Every backend response uses the envelope
//! `{ success, statusCode, message, data?, errors?, timestamp }`. Parsing
//! happens once, here, so downstream code only ever sees typed values or an
//! [`ApiError`] - no ad hoc field-presence checks.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use foliotrack_core::errors::{ApiError, FieldIssue};

use super::transport::HttpResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<FieldIssue>>,
}

fn status_error(response: &HttpResponse) -> ApiError {
    // Error envelopes can be partial (proxies, crashes); fall back to the
    // transport status line when fields are missing.
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(&response.body).unwrap_or(Envelope {
            success: false,
            status_code: None,
            message: None,
            data: None,
            errors: None,
        });
    ApiError::Status {
        status_code: envelope.status_code.unwrap_or(response.status),
        message: envelope
            .message
            .unwrap_or_else(|| format!("Request failed with status {}", response.status)),
        errors: envelope.errors.unwrap_or_default(),
    }
}

/// Parses a response into the typed `data` payload.
pub fn parse<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(status_error(response));
    }

    let envelope: Envelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !envelope.success {
        return Err(ApiError::Status {
            status_code: envelope.status_code.unwrap_or(response.status),
            message: envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string()),
            errors: envelope.errors.unwrap_or_default(),
        });
    }

    envelope
        .data
        .ok_or_else(|| ApiError::Decode("Response envelope is missing data".to_string()))
}

/// Parses a response that carries no `data` payload.
pub fn parse_empty(response: &HttpResponse) -> Result<(), ApiError> {
    if !response.is_success() {
        return Err(status_error(response));
    }
    Ok(())
}
