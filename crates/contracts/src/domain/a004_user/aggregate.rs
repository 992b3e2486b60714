use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
}

impl ResourceStatus for UserStatus {
    const ALL: &'static [Self] = &[UserStatus::Active, UserStatus::Inactive, UserStatus::Banned];

    fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Banned => "banned",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Banned => "Banned",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            UserStatus::Active => StatusTone::Success,
            UserStatus::Inactive => StatusTone::Neutral,
            UserStatus::Banned => StatusTone::Danger,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Customer account of the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub balance: f64,
    /// Personal discount in percent.
    #[serde(default)]
    pub discount: f64,
    pub status: UserStatus,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AdminResource for User {
    type Status = UserStatus;
    type Stats = UserStats;

    const COLLECTION: &'static str = "users";
    const ELEMENT_NAME: &'static str = "User";
    const LIST_NAME: &'static str = "Users";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> UserStatus {
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
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub banned_users: u64,
    /// Registrations within the requested period.
    pub new_users: u64,
    pub total_balance: f64,
    pub total_spent: f64,
}
