//! Investment domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation;

/// Asset class of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    Stock,
    MutualFund,
    Bond,
    Cryptocurrency,
}

/// Domain model representing a single holding inside a portfolio.
///
/// SIP fields describe a systematic (recurring) investment plan; they are
/// meaningful only when `is_sip` is set and are validated as a group at the
/// form boundary, not by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub portfolio_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "isSIP")]
    pub is_sip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_duration: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Investment {
    /// Amount originally paid for the position.
    pub fn cost_basis(&self) -> Decimal {
        self.purchase_price * self.quantity
    }

    /// Current market value of the position.
    pub fn market_value(&self) -> Decimal {
        self.current_price * self.quantity
    }

    /// Absolute gain (or loss, when negative) since purchase.
    pub fn gain_loss(&self) -> Decimal {
        self.market_value() - self.cost_basis()
    }

    /// Gain as a percentage of the cost basis.
    ///
    /// `None` when the cost basis is zero; callers must guard before display.
    pub fn gain_loss_percent(&self) -> Option<Decimal> {
        let cost = self.cost_basis();
        if cost.is_zero() {
            return None;
        }
        Some(self.gain_loss() / cost * Decimal::ONE_HUNDRED)
    }
}

/// Input model for creating a new investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "isSIP")]
    pub is_sip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_duration: Option<u32>,
}

impl NewInvestment {
    /// Form-boundary validation.
    ///
    /// Quantity and prices must be positive, and the SIP fields are required
    /// as a group exactly when `is_sip` is set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::require(&self.name, "name")?;
        validation::require(&self.symbol, "symbol")?;
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        if self.purchase_price <= Decimal::ZERO || self.current_price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Prices must be greater than zero".to_string(),
            ));
        }
        if self.is_sip {
            if self.sip_amount.is_none() {
                return Err(ValidationError::MissingField("sipAmount".to_string()));
            }
            if self.sip_start_date.is_none() {
                return Err(ValidationError::MissingField("sipStartDate".to_string()));
            }
            if self.sip_duration.is_none() {
                return Err(ValidationError::MissingField("sipDuration".to_string()));
            }
        } else if self.sip_amount.is_some()
            || self.sip_start_date.is_some()
            || self.sip_duration.is_some()
        {
            return Err(ValidationError::InvalidInput(
                "SIP fields are only allowed on SIP investments".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for an existing investment; omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
