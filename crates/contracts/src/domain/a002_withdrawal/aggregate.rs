use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Approved,
    Rejected,
    Cancelled,
}

impl ResourceStatus for WithdrawalStatus {
    const ALL: &'static [Self] = &[
        WithdrawalStatus::Pending,
        WithdrawalStatus::Processing,
        WithdrawalStatus::Approved,
        WithdrawalStatus::Rejected,
        WithdrawalStatus::Cancelled,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Processing => "processing",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "Pending",
            WithdrawalStatus::Processing => "Processing",
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Rejected => "Rejected",
            WithdrawalStatus::Cancelled => "Cancelled",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            WithdrawalStatus::Pending => StatusTone::Warning,
            WithdrawalStatus::Processing => StatusTone::Primary,
            WithdrawalStatus::Approved => StatusTone::Success,
            WithdrawalStatus::Rejected => StatusTone::Danger,
            WithdrawalStatus::Cancelled => StatusTone::Neutral,
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self,
            WithdrawalStatus::Approved | WithdrawalStatus::Rejected | WithdrawalStatus::Cancelled
        )
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Payout request raised by a user or an affiliate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub amount: f64,
    /// Payout channel, e.g. `paypal`, `usdt`, `bank`.
    pub method: String,
    #[serde(default)]
    pub account_details: Option<String>,
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Withdrawal {
    /// Only requests that have not been paid out yet may be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self.status,
            WithdrawalStatus::Pending | WithdrawalStatus::Processing
        )
    }

    pub fn can_approve(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Transaction ids are editable once a payout went out.
    pub fn can_update_transaction_id(&self) -> bool {
        self.status == WithdrawalStatus::Approved
    }
}

impl AdminResource for Withdrawal {
    type Status = WithdrawalStatus;
    type Stats = WithdrawalStats;

    const COLLECTION: &'static str = "withdrawals";
    const ELEMENT_NAME: &'static str = "Withdrawal";
    const LIST_NAME: &'static str = "Withdrawals";
    const SUPPORTS_BULK: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> WithdrawalStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WithdrawalStats {
    pub total_requests: u64,
    pub pending_requests: u64,
    pub processing_requests: u64,
    pub approved_requests: u64,
    pub rejected_requests: u64,
    pub total_amount: f64,
    pub pending_amount: f64,
    pub approved_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_withdrawal() {
        let w: Withdrawal = serde_json::from_value(json!({
            "id": 31,
            "username": "maria",
            "amount": 120.5,
            "method": "usdt",
            "accountDetails": "TX9...",
            "status": "processing",
            "createdAt": "2024-06-02T08:30:00Z"
        }))
        .unwrap();
        assert_eq!(w.id, "31");
        assert_eq!(w.status, WithdrawalStatus::Processing);
        assert!(w.is_selectable());
        assert!(w.can_cancel());
        assert_eq!(w.transaction_id, None);
    }

    #[test]
    fn test_terminal_statuses_are_not_selectable() {
        for status in WithdrawalStatus::ALL {
            let terminal = matches!(
                status,
                WithdrawalStatus::Approved
                    | WithdrawalStatus::Rejected
                    | WithdrawalStatus::Cancelled
            );
            assert_eq!(status.is_terminal(), terminal, "{:?}", status);
        }
    }

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let stats: WithdrawalStats =
            serde_json::from_value(json!({ "pendingRequests": 3, "pendingAmount": 75.0 }))
                .unwrap();
        assert_eq!(stats.pending_requests, 3);
        assert_eq!(stats.total_requests, 0);
    }
}
