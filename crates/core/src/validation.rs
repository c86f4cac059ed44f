//! Input validation helpers shared by the request models.
//!
//! These run at the form boundary, before any network call is issued. They
//! return [`ValidationError`] so callers can surface a message without
//! branching on error internals.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::PASSWORD_MIN_LENGTH;
use crate::errors::ValidationError;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Validates that a required string field is present and non-blank.
pub fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}

/// Validates an email address shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require(email, "email")?;
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidInput(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Validates password strength: minimum length plus lowercase, uppercase,
/// digit, and special character classes.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    require(password, "password")?;
    if password.len() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::InvalidInput(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LENGTH
        )));
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    if !(has_lower && has_upper && has_digit && has_special) {
        return Err(ValidationError::InvalidInput(
            "Password must contain uppercase, lowercase, number, and special character".to_string(),
        ));
    }
    Ok(())
}
