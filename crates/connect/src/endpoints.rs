//! REST endpoint paths for the tracker backend.

use foliotrack_core::transactions::TransactionFilter;

// Auth endpoints
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_REFRESH_TOKEN: &str = "/auth/refresh-token";
pub const AUTH_CURRENT_USER: &str = "/auth/me";

// User endpoints
pub const USERS_PROFILE: &str = "/users/profile";
pub const USERS_CHANGE_PASSWORD: &str = "/users/change-password";
pub const USERS_STATS: &str = "/users/stats";
pub const USERS_ACCOUNT: &str = "/users/account";

// Dashboard endpoints
pub const DASHBOARD_SUMMARY: &str = "/dashboard/summary";

// Portfolio endpoints
pub const PORTFOLIOS: &str = "/portfolios";

pub fn portfolio(portfolio_id: &str) -> String {
    format!("/portfolios/{}", portfolio_id)
}

pub fn investments(portfolio_id: &str) -> String {
    format!("/portfolios/{}/investments", portfolio_id)
}

pub fn investment(portfolio_id: &str, investment_id: &str) -> String {
    format!("/portfolios/{}/investments/{}", portfolio_id, investment_id)
}

pub fn investment_transactions(portfolio_id: &str, investment_id: &str) -> String {
    format!(
        "/portfolios/{}/investments/{}/transactions",
        portfolio_id, investment_id
    )
}

/// Transaction listing path with the filter rendered as query parameters.
pub fn portfolio_transactions(portfolio_id: &str, filter: &TransactionFilter) -> String {
    let path = format!("/portfolios/{}/transactions", portfolio_id);
    if filter.is_empty() {
        return path;
    }
    let query: Vec<String> = filter
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect();
    format!("{}?{}", path, query.join("&"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use foliotrack_core::transactions::TransactionType;

    use super::*;

    #[test]
    fn test_nested_paths() {
        assert_eq!(portfolio("pf-1"), "/portfolios/pf-1");
        assert_eq!(
            investment_transactions("pf-1", "inv-2"),
            "/portfolios/pf-1/investments/inv-2/transactions"
        );
    }

    #[test]
    fn test_transaction_listing_without_filter() {
        let path = portfolio_transactions("pf-1", &TransactionFilter::default());
        assert_eq!(path, "/portfolios/pf-1/transactions");
    }

    #[test]
    fn test_transaction_listing_with_filter() {
        let filter = TransactionFilter {
            transaction_type: Some(TransactionType::Buy),
            from_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            to_date: None,
            page: Some(1),
            limit: Some(10),
        };
        assert_eq!(
            portfolio_transactions("pf-1", &filter),
            "/portfolios/pf-1/transactions?type=BUY&fromDate=2024-01-01&page=1&limit=10"
        );
    }
}
