//! Credentials module - durable client storage for the session tokens and
//! the cached user snapshot.

mod file_store;

pub use file_store::FileCredentialStore;
