//! Tests for dashboard aggregate math.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::dashboard::{gain_loss_percent, DashboardSummary, PortfolioSummary};
use crate::investments::{Investment, InvestmentType};
use crate::portfolios::Portfolio;

fn test_portfolio(id: &str, name: &str) -> Portfolio {
    Portfolio {
        id: id.to_string(),
        user_id: "usr-1".to_string(),
        name: name.to_string(),
        description: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        deleted_at: None,
    }
}

fn summary(id: &str, invested: rust_decimal::Decimal, value: rust_decimal::Decimal) -> PortfolioSummary {
    let gain = value - invested;
    PortfolioSummary {
        portfolio_id: id.to_string(),
        portfolio_name: id.to_string(),
        total_invested_amount: invested,
        total_current_value: value,
        total_gain_loss: gain,
        gain_loss_percentage: gain_loss_percent(invested, gain),
        number_of_investments: 1,
    }
}

#[test]
fn test_gain_loss_percent_guards_zero_invested() {
    assert_eq!(gain_loss_percent(dec!(0), dec!(100)), None);
    assert_eq!(gain_loss_percent(dec!(1000), dec!(150)), Some(dec!(15)));
}

#[test]
fn test_portfolio_summary_from_investments() {
    let portfolio = test_portfolio("pf-1", "Growth");
    let investment = Investment {
        id: "inv-1".to_string(),
        portfolio_id: "pf-1".to_string(),
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
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        deleted_at: None,
    };

    let built = PortfolioSummary::for_investments(&portfolio, &[investment]);
    assert_eq!(built.total_invested_amount, dec!(1000));
    assert_eq!(built.total_current_value, dec!(1500));
    assert_eq!(built.total_gain_loss, dec!(500));
    assert_eq!(built.gain_loss_percentage, Some(dec!(50)));
    assert_eq!(built.number_of_investments, 1);
}

#[test]
fn test_empty_portfolio_has_undefined_percentage() {
    let built = PortfolioSummary::for_investments(&test_portfolio("pf-2", "Empty"), &[]);
    assert_eq!(built.total_invested_amount, dec!(0));
    assert_eq!(built.gain_loss_percentage, None);
}

#[test]
fn test_dashboard_aggregate_totals() {
    // (invested 1000, value 1200) + (invested 500, value 450)
    // -> invested 1500, value 1650, gain 150, 10%
    let aggregated = DashboardSummary::aggregate(vec![
        summary("pf-1", dec!(1000), dec!(1200)),
        summary("pf-2", dec!(500), dec!(450)),
    ]);

    assert_eq!(aggregated.total_portfolios, 2);
    assert_eq!(aggregated.total_invested_amount, dec!(1500));
    assert_eq!(aggregated.total_current_value, dec!(1650));
    assert_eq!(aggregated.total_gain_loss, dec!(150));
    assert_eq!(aggregated.overall_gain_loss_percentage, Some(dec!(10)));
}

#[test]
fn test_dashboard_aggregate_of_nothing() {
    let aggregated = DashboardSummary::aggregate(Vec::new());
    assert_eq!(aggregated.total_portfolios, 0);
    assert_eq!(aggregated.total_gain_loss, dec!(0));
    assert_eq!(aggregated.overall_gain_loss_percentage, None);
}
