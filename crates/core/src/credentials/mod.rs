//! Credentials module - durable session storage contract.
//!
//! The gateway and the session service both read and write tokens through
//! the [`CredentialStore`] trait. The execution model is single-threaded
//! interleaving, so last-write-wins access needs no coordination beyond the
//! store's own internal lock.

mod credentials_constants;
mod credentials_model;
mod credentials_traits;
mod memory_store;

// Re-export the public interface
pub use credentials_constants::*;
pub use credentials_model::StoredSession;
pub use credentials_traits::CredentialStore;
pub use memory_store::MemoryCredentialStore;
