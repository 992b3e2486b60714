use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Colour family a status badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "neutral",
            StatusTone::Primary => "primary",
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Danger => "error",
        }
    }
}

/// Closed status enum carried by every admin resource.
pub trait ResourceStatus:
    Copy + Eq + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every variant, in the order the status filter lists them.
    const ALL: &'static [Self];

    /// Value used on the wire and in the `status=` query parameter.
    fn as_str(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    fn tone(&self) -> StatusTone;

    /// Terminal statuses accept no further mutations.
    fn is_terminal(&self) -> bool {
        false
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// A record type managed through one admin list page.
///
/// The static part (collection path, names, stats shape) drives the generic
/// list machinery; the instance part exposes what rendering and selection need.
pub trait AdminResource: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Status: ResourceStatus;
    /// Aggregate snapshot returned by `GET /api/admin/<collection>/stats`.
    type Stats: Clone + Debug + Default + PartialEq + DeserializeOwned + Send + Sync + 'static;

    /// Path segment under `/api/admin/`, e.g. `"withdrawals"`.
    const COLLECTION: &'static str;
    /// Singular UI name, e.g. `"Withdrawal"`.
    const ELEMENT_NAME: &'static str;
    /// Plural UI name, e.g. `"Withdrawals"`.
    const LIST_NAME: &'static str;
    /// Whether the page renders selection checkboxes and bulk buttons.
    const SUPPORTS_BULK: bool = false;

    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    fn created_at(&self) -> DateTime<Utc>;

    /// Row-level exclusion rule for bulk selection.
    fn is_selectable(&self) -> bool {
        Self::SUPPORTS_BULK && !self.status().is_terminal()
    }

    /// Main text shown in the first column and in dialog titles.
    fn display_name(&self) -> String;
}
