//! Notifications module - transient toast-style banners.

mod notifications_model;
mod notifications_service;


// Re-export the public interface
pub use notifications_model::{Notification, NotificationLevel};
pub use notifications_service::NotificationStore;
