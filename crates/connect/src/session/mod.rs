//! Session module - authenticated-user lifecycle.

mod session_model;
mod session_service;
mod session_traits;

#[cfg(test)]
mod session_service_tests;

// Re-export the public interface
pub use session_model::SessionState;
pub use session_service::SessionService;
pub use session_traits::SessionServiceTrait;
