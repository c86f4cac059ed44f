//! Credential storage trait.
//!
//! Implementations persist small string values under fixed keys. The file
//! implementation lives in `foliotrack-connect`; an in-memory implementation
//! is provided here for tests and ephemeral sessions.

use crate::errors::Result;

/// Trait defining the contract for durable credential storage.
///
/// Implementations must be safe to share across tasks; operations are
/// synchronous and expected to be fast (no network).
pub trait CredentialStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;

    /// Removes every stored value.
    fn clear(&self) -> Result<()>;
}
