use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffiliateStatus {
    Pending,
    Active,
    Inactive,
    Suspended,
}

impl ResourceStatus for AffiliateStatus {
    const ALL: &'static [Self] = &[
        AffiliateStatus::Pending,
        AffiliateStatus::Active,
        AffiliateStatus::Inactive,
        AffiliateStatus::Suspended,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AffiliateStatus::Pending => "pending",
            AffiliateStatus::Active => "active",
            AffiliateStatus::Inactive => "inactive",
            AffiliateStatus::Suspended => "suspended",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AffiliateStatus::Pending => "Pending",
            AffiliateStatus::Active => "Active",
            AffiliateStatus::Inactive => "Inactive",
            AffiliateStatus::Suspended => "Suspended",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AffiliateStatus::Pending => StatusTone::Warning,
            AffiliateStatus::Active => StatusTone::Success,
            AffiliateStatus::Inactive => StatusTone::Neutral,
            AffiliateStatus::Suspended => StatusTone::Danger,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Referral partner earning commission on the orders of referred users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub referral_code: String,
    pub status: AffiliateStatus,
    /// Percent of each referred order.
    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default)]
    pub total_referrals: u64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub available_balance: f64,
    #[serde(default)]
    pub total_paid_out: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_details: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl Affiliate {
    pub fn can_receive_payout(&self) -> bool {
        self.status == AffiliateStatus::Active && self.available_balance > 0.0
    }
}

impl AdminResource for Affiliate {
    type Status = AffiliateStatus;
    type Stats = AffiliateStats;

    const COLLECTION: &'static str = "affiliates";
    const ELEMENT_NAME: &'static str = "Affiliate";
    const LIST_NAME: &'static str = "Affiliates";
    const SUPPORTS_BULK: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> AffiliateStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Suspended affiliates are excluded from bulk actions.
    fn is_selectable(&self) -> bool {
        self.status != AffiliateStatus::Suspended
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
pub struct AffiliateStats {
    pub total_affiliates: u64,
    pub active_affiliates: u64,
    pub pending_affiliates: u64,
    pub suspended_affiliates: u64,
    pub total_referrals: u64,
    pub total_earnings: f64,
    pub pending_payouts: f64,
    pub total_paid_out: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn affiliate(status: &str) -> Affiliate {
        serde_json::from_value(json!({
            "id": "af_1",
            "username": "growthhub",
            "email": "hub@example.com",
            "referralCode": "HUB10",
            "status": status,
            "availableBalance": 42.0,
            "createdAt": "2024-03-10T12:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_suspended_is_not_selectable() {
        assert!(affiliate("active").is_selectable());
        assert!(affiliate("pending").is_selectable());
        assert!(!affiliate("suspended").is_selectable());
    }

    #[test]
    fn test_payout_eligibility() {
        assert!(affiliate("active").can_receive_payout());
        assert!(!affiliate("inactive").can_receive_payout());
    }
}
