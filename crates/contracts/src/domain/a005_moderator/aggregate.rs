use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Role & status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeratorRole {
    Admin,
    Moderator,
    Support,
}

impl ModeratorRole {
    pub const ALL: [ModeratorRole; 3] = [
        ModeratorRole::Admin,
        ModeratorRole::Moderator,
        ModeratorRole::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeratorRole::Admin => "admin",
            ModeratorRole::Moderator => "moderator",
            ModeratorRole::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeratorRole::Admin => "Admin",
            ModeratorRole::Moderator => "Moderator",
            ModeratorRole::Support => "Support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeratorStatus {
    Active,
    Inactive,
    Suspended,
}

impl ResourceStatus for ModeratorStatus {
    const ALL: &'static [Self] = &[
        ModeratorStatus::Active,
        ModeratorStatus::Inactive,
        ModeratorStatus::Suspended,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ModeratorStatus::Active => "active",
            ModeratorStatus::Inactive => "inactive",
            ModeratorStatus::Suspended => "suspended",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ModeratorStatus::Active => "Active",
            ModeratorStatus::Inactive => "Inactive",
            ModeratorStatus::Suspended => "Suspended",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ModeratorStatus::Active => StatusTone::Success,
            ModeratorStatus::Inactive => StatusTone::Neutral,
            ModeratorStatus::Suspended => StatusTone::Danger,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Staff account with access to the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderator {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: ModeratorRole,
    pub status: ModeratorStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub actions_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AdminResource for Moderator {
    type Status = ModeratorStatus;
    type Stats = ModeratorStats;

    const COLLECTION: &'static str = "moderators";
    const ELEMENT_NAME: &'static str = "Moderator";
    const LIST_NAME: &'static str = "Moderators";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ModeratorStatus {
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
pub struct ModeratorStats {
    pub total_moderators: u64,
    pub active_moderators: u64,
    pub admins: u64,
    pub moderators: u64,
    pub support: u64,
    /// Actions logged within the requested period.
    pub total_actions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_moderator() {
        let m: Moderator = serde_json::from_value(json!({
            "id": 3,
            "username": "ops",
            "email": "ops@example.com",
            "role": "support",
            "status": "active",
            "createdAt": "2023-11-20T09:15:00Z"
        }))
        .unwrap();
        assert_eq!(m.role, ModeratorRole::Support);
        assert!(m.permissions.is_empty());
        assert_eq!(ModeratorRole::parse("admin"), Some(ModeratorRole::Admin));
        assert_eq!(ModeratorRole::parse("root"), None);
    }
}
