use crate::domain::common::{deserialize_id, AdminResource, ResourceStatus, StatusTone};
use crate::shared::money::margin_percent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl ResourceStatus for ServiceStatus {
    const ALL: &'static [Self] = &[ServiceStatus::Active, ServiceStatus::Inactive];

    fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "Active",
            ServiceStatus::Inactive => "Inactive",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ServiceStatus::Active => StatusTone::Success,
            ServiceStatus::Inactive => StatusTone::Neutral,
        }
    }
}

/// Service sold on the panel, usually imported from an upstream provider.
/// Rates are per 1000 units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider_service_id: Option<String>,
    /// Price paid to the provider.
    #[serde(default)]
    pub provider_rate: f64,
    /// Price charged to customers.
    pub rate: f64,
    #[serde(default)]
    pub min: u64,
    #[serde(default)]
    pub max: u64,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    pub fn margin_percent(&self) -> Option<f64> {
        margin_percent(self.provider_rate, self.rate)
    }
}

impl AdminResource for Service {
    type Status = ServiceStatus;
    type Stats = ServiceStats;

    const COLLECTION: &'static str = "services";
    const ELEMENT_NAME: &'static str = "Service";
    const LIST_NAME: &'static str = "Services";
    const SUPPORTS_BULK: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ServiceStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStats {
    pub total_services: u64,
    pub active_services: u64,
    pub inactive_services: u64,
    pub categories: u64,
    pub providers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_margin() {
        let s: Service = serde_json::from_value(json!({
            "id": 901,
            "name": "TikTok Views",
            "category": "TikTok",
            "providerRate": 0.4,
            "rate": 0.5,
            "status": "active",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(s.margin_percent(), Some(25.0));
        assert!(s.is_selectable());
    }
}
