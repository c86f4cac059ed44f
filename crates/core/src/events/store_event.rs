//! Store event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the client stores after successful state changes.
///
/// These events represent facts about cached client data. The UI layer
/// subscribes to them to re-render from store snapshots; embedders translate
/// `SessionInvalidated` into a redirect to the login screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The session transitioned between authenticated and anonymous.
    SessionChanged { authenticated: bool },

    /// Stored credentials were cleared because a refresh failed or was
    /// impossible. The user must authenticate again.
    SessionInvalidated,

    /// The cached portfolio list changed (fetched, created, updated, or
    /// deleted entries).
    PortfoliosChanged { portfolio_ids: Vec<String> },

    /// The cached investments of a portfolio changed.
    InvestmentsChanged { portfolio_id: String },

    /// Transactions were fetched or recorded for a portfolio.
    TransactionsRecorded { portfolio_id: String },

    /// The dashboard summary was refreshed from the backend.
    DashboardRefreshed,

    /// A transient notification was pushed.
    NotificationPushed { id: String },

    /// A transient notification was dismissed (explicitly or by timer).
    NotificationDismissed { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_event_serialization() {
        let event = StoreEvent::PortfoliosChanged {
            portfolio_ids: vec!["pf-1".to_string()],
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("portfolios_changed"));

        let deserialized: StoreEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_session_invalidated_is_a_bare_tag() {
        let json = serde_json::to_string(&StoreEvent::SessionInvalidated).unwrap();
        assert_eq!(json, r#"{"type":"session_invalidated"}"#);
    }
}
