use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelRequestStatus {
    Pending,
    Approved,
    Declined,
}

impl ResourceStatus for CancelRequestStatus {
    const ALL: &'static [Self] = &[
        CancelRequestStatus::Pending,
        CancelRequestStatus::Approved,
        CancelRequestStatus::Declined,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CancelRequestStatus::Pending => "pending",
            CancelRequestStatus::Approved => "approved",
            CancelRequestStatus::Declined => "declined",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CancelRequestStatus::Pending => "Pending",
            CancelRequestStatus::Approved => "Approved",
            CancelRequestStatus::Declined => "Declined",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            CancelRequestStatus::Pending => StatusTone::Warning,
            CancelRequestStatus::Approved => StatusTone::Success,
            CancelRequestStatus::Declined => StatusTone::Danger,
        }
    }

    fn is_terminal(&self) -> bool {
        *self != CancelRequestStatus::Pending
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A customer's request to cancel an order and get a refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub order_id: String,
    pub username: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    /// Amount the customer was charged for the order.
    pub charge: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: CancelRequestStatus,
    #[serde(default)]
    pub refund_amount: Option<f64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub decline_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

impl AdminResource for CancelRequest {
    type Status = CancelRequestStatus;
    type Stats = CancelRequestStats;

    const COLLECTION: &'static str = "cancel-requests";
    const ELEMENT_NAME: &'static str = "Cancel request";
    const LIST_NAME: &'static str = "Cancel requests";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> CancelRequestStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn display_name(&self) -> String {
        format!("Order #{}", self.order_id)
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelRequestStats {
    pub total_requests: u64,
    pub pending_requests: u64,
    pub approved_requests: u64,
    pub declined_requests: u64,
    pub total_refunded: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_cancel_request() {
        let r: CancelRequest = serde_json::from_value(json!({
            "id": 5,
            "orderId": 10452,
            "username": "kate",
            "serviceName": "Instagram Followers",
            "charge": 3.2,
            "status": "pending",
            "createdAt": "2024-07-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(r.order_id, "10452");
        assert_eq!(r.display_name(), "Order #10452");
        assert!(!r.is_selectable());
        assert!(CancelRequestStatus::Declined.is_terminal());
    }
}
