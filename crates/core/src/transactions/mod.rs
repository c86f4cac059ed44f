//! Transactions module - buy/sell transaction domain models.

mod transactions_model;


// Re-export the public interface
pub use transactions_model::{NewTransaction, Transaction, TransactionFilter, TransactionType};
