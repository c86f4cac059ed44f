//! Tests for investment models, valuation math, and SIP validation.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::investments::{Investment, InvestmentType, NewInvestment};

fn test_investment(purchase_price: Decimal, current_price: Decimal, quantity: Decimal) -> Investment {
    Investment {
        id: "inv-1".to_string(),
        portfolio_id: "pf-1".to_string(),
        name: "Acme Corp".to_string(),
        symbol: "ACME".to_string(),
        investment_type: InvestmentType::Stock,
        quantity,
        purchase_price,
        current_price,
        purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        notes: None,
        is_sip: false,
        sip_amount: None,
        sip_start_date: None,
        sip_duration: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        deleted_at: None,
    }
}

fn new_investment() -> NewInvestment {
    NewInvestment {
        name: "Acme Corp".to_string(),
        symbol: "ACME".to_string(),
        investment_type: InvestmentType::Stock,
        quantity: dec!(10),
        purchase_price: dec!(100),
        current_price: dec!(150),
        purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        notes: None,
        is_sip: false,
        sip_amount: None,
        sip_start_date: None,
        sip_duration: None,
    }
}

#[test]
fn test_gain_loss_math() {
    // purchase 100, current 150, quantity 10 -> profit 500, 50%
    let investment = test_investment(dec!(100), dec!(150), dec!(10));
    assert_eq!(investment.cost_basis(), dec!(1000));
    assert_eq!(investment.market_value(), dec!(1500));
    assert_eq!(investment.gain_loss(), dec!(500));
    assert_eq!(investment.gain_loss_percent(), Some(dec!(50)));
}

#[test]
fn test_gain_loss_can_be_negative() {
    let investment = test_investment(dec!(200), dec!(150), dec!(4));
    assert_eq!(investment.gain_loss(), dec!(-200));
    assert_eq!(investment.gain_loss_percent(), Some(dec!(-25)));
}

#[test]
fn test_gain_loss_percent_undefined_for_zero_cost_basis() {
    let investment = test_investment(dec!(0), dec!(150), dec!(10));
    assert_eq!(investment.gain_loss_percent(), None);
}

#[test]
fn test_investment_type_wire_format() {
    assert_eq!(
        serde_json::to_string(&InvestmentType::MutualFund).unwrap(),
        "\"MUTUAL_FUND\""
    );
    assert_eq!(
        serde_json::from_str::<InvestmentType>("\"CRYPTOCURRENCY\"").unwrap(),
        InvestmentType::Cryptocurrency
    );
}

#[test]
fn test_is_sip_uses_original_casing() {
    let json = serde_json::to_string(&new_investment()).unwrap();
    assert!(json.contains("\"isSIP\":false"));
}

#[test]
fn test_validate_accepts_plain_investment() {
    assert!(new_investment().validate().is_ok());
}

#[test]
fn test_validate_rejects_non_positive_amounts() {
    let mut zero_quantity = new_investment();
    zero_quantity.quantity = dec!(0);
    assert!(zero_quantity.validate().is_err());

    let mut negative_price = new_investment();
    negative_price.purchase_price = dec!(-1);
    assert!(negative_price.validate().is_err());
}

#[test]
fn test_validate_requires_sip_fields_as_a_group() {
    let mut sip = new_investment();
    sip.is_sip = true;
    sip.sip_amount = Some(dec!(500));
    sip.sip_start_date = Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    // duration still missing
    assert!(sip.validate().is_err());

    sip.sip_duration = Some(12);
    assert!(sip.validate().is_ok());
}

#[test]
fn test_validate_rejects_sip_fields_without_flag() {
    let mut not_sip = new_investment();
    not_sip.sip_amount = Some(dec!(500));
    assert!(not_sip.validate().is_err());
}
