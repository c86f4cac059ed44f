//! Investments module - investment domain models and valuation helpers.

mod investments_model;

#[cfg(test)]
mod investments_model_tests;

// Re-export the public interface
pub use investments_model::{Investment, InvestmentType, InvestmentUpdate, NewInvestment};
