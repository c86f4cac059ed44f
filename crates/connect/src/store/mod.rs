//! Store module - in-memory portfolio cache.

mod store_model;
mod store_service;
mod store_traits;


// Re-export the public interface
pub use store_model::PortfolioStoreState;
pub use store_service::PortfolioStore;
pub use store_traits::PortfolioStoreTrait;
