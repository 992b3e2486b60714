//! Single-resource mutations and the dialog lifecycle around them

use super::error::{require, ValidationError};
use crate::domain::common::ResourceStatus;
use serde_json::{json, Value};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Closed set of operations the admin panel performs on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Approve,
    Decline,
    ChangeStatus,
    ChangeRole,
    SetBalance,
    SetDiscount,
    Delete,
    ProcessPayout,
    UpdateTransactionId,
    Cancel,
}

impl Operation {
    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::Approve
            | Operation::ProcessPayout
            | Operation::UpdateTransactionId
            | Operation::Cancel => HttpMethod::Post,
            Operation::Decline
            | Operation::ChangeStatus
            | Operation::ChangeRole
            | Operation::SetBalance
            | Operation::SetDiscount => HttpMethod::Patch,
            Operation::Delete => HttpMethod::Delete,
        }
    }

    /// Path segment after `/api/admin/<collection>/<id>`; `None` targets the
    /// resource itself.
    pub fn path_suffix(&self) -> Option<&'static str> {
        match self {
            Operation::Approve => Some("approve"),
            // A decline is a status change carrying a reason.
            Operation::Decline | Operation::ChangeStatus => Some("status"),
            Operation::ChangeRole => Some("role"),
            Operation::SetBalance => Some("balance"),
            Operation::SetDiscount => Some("discount"),
            Operation::Delete => None,
            Operation::ProcessPayout => Some("payout"),
            Operation::UpdateTransactionId => Some("update-transaction-id"),
            Operation::Cancel => Some("cancel"),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Approve => "Approved successfully",
            Operation::Decline => "Declined successfully",
            Operation::ChangeStatus => "Status updated",
            Operation::ChangeRole => "Role updated",
            Operation::SetBalance => "Balance updated",
            Operation::SetDiscount => "Discount updated",
            Operation::Delete => "Deleted successfully",
            Operation::ProcessPayout => "Payout processed",
            Operation::UpdateTransactionId => "Transaction ID updated",
            Operation::Cancel => "Cancelled successfully",
        }
    }
}

/// One request for one resource, built by a dialog and submitted once.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest {
    pub collection: &'static str,
    pub resource_id: String,
    pub operation: Operation,
    pub payload: Option<Value>,
}

impl MutationRequest {
    pub fn new(collection: &'static str, resource_id: impl Into<String>, operation: Operation) -> Self {
        Self {
            collection,
            resource_id: resource_id.into(),
            operation,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.operation.method()
    }

    /// Request path with the id passed through `encode_segment`.
    pub fn path_with<F>(&self, encode_segment: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let base = format!(
            "/api/admin/{}/{}",
            self.collection,
            encode_segment(&self.resource_id)
        );
        match self.operation.path_suffix() {
            Some(suffix) => format!("{}/{}", base, suffix),
            None => base,
        }
    }

    /// Key of the in-flight guard: two different rows never share one.
    pub fn in_flight_key(&self) -> String {
        format!(
            "{} {}",
            self.method().as_str(),
            self.path_with(|id| id.to_string())
        )
    }
}

/// Keys of submissions still awaiting a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    keys: BTreeSet<String>,
}

impl InFlight {
    /// `false` when the same key is already pending; the caller must not send.
    pub fn try_begin(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn finish(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Form state of a mutation dialog.
pub trait MutationForm {
    fn validate(&self) -> Result<(), ValidationError>;

    /// Submit control is enabled exactly when this holds.
    fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError>;

    /// Clears user input after a successful submit.
    fn reset(&mut self);
}

/// Generic "change status" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeForm<S> {
    pub collection: &'static str,
    pub current: S,
    pub proposed: S,
    pub note: String,
}

impl<S: ResourceStatus> StatusChangeForm<S> {
    pub fn new(collection: &'static str, current: S) -> Self {
        Self {
            collection,
            current,
            proposed: current,
            note: String::new(),
        }
    }
}

impl<S: ResourceStatus> MutationForm for StatusChangeForm<S> {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.proposed == self.current {
            return Err(ValidationError::Unchanged);
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let mut payload = json!({ "status": self.proposed.as_str() });
        let note = self.note.trim();
        if !note.is_empty() {
            payload["note"] = Value::String(note.to_string());
        }
        Ok(MutationRequest::new(self.collection, resource_id, Operation::ChangeStatus)
            .with_payload(payload))
    }

    fn reset(&mut self) {
        self.proposed = self.current;
        self.note.clear();
    }
}

/// Generic "decline with reason" dialog; the reason is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclineForm {
    pub collection: &'static str,
    /// Wire value of the status the resource moves to.
    pub declined_status: &'static str,
    pub reason: String,
}

impl DeclineForm {
    pub fn new(collection: &'static str, declined_status: &'static str) -> Self {
        Self {
            collection,
            declined_status,
            reason: String::new(),
        }
    }
}

impl MutationForm for DeclineForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.reason, "Reason").map(|_| ())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        let reason = require(&self.reason, "Reason")?;
        Ok(
            MutationRequest::new(self.collection, resource_id, Operation::Decline).with_payload(
                json!({ "status": self.declined_status, "reason": reason }),
            ),
        )
    }

    fn reset(&mut self) {
        self.reason.clear();
    }
}

/// Confirmation-only delete dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteForm {
    pub collection: &'static str,
}

impl MutationForm for DeleteForm {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        Ok(MutationRequest::new(self.collection, resource_id, Operation::Delete))
    }

    fn reset(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Editing,
    Submitting,
}

/// Open → submit → close-or-retry cycle shared by all mutation dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLifecycle {
    phase: DialogPhase,
    error: Option<String>,
}

impl Default for DialogLifecycle {
    fn default() -> Self {
        Self {
            phase: DialogPhase::Closed,
            error: None,
        }
    }
}

impl DialogLifecycle {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.phase = DialogPhase::Editing;
        self.error = None;
    }

    /// Ignored while a submission is in flight.
    pub fn close(&mut self) {
        if self.phase != DialogPhase::Submitting {
            self.phase = DialogPhase::Closed;
            self.error = None;
        }
    }

    /// `false` when the dialog is not in a state that may submit.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != DialogPhase::Editing {
            return false;
        }
        self.phase = DialogPhase::Submitting;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = DialogPhase::Closed;
        self.error = None;
    }

    /// The dialog stays open so the user can retry or cancel.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = DialogPhase::Editing;
        self.error = Some(message.into());
    }
}

/// Bulk buttons shown above selectable tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Approve,
    Decline,
    Suspend,
    Delete,
}

/// Result of dispatching a bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// No batch endpoint exists yet; nothing was sent.
    Unsupported { message: String },
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Approve => "Approve",
            BulkAction::Decline => "Decline",
            BulkAction::Suspend => "Suspend",
            BulkAction::Delete => "Delete",
        }
    }

    pub fn dispatch(&self, selected: usize) -> BulkOutcome {
        BulkOutcome::Unsupported {
            message: format!(
                "Bulk {} for {} selected item(s) is not yet supported",
                self.label().to_lowercase(),
                selected
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_affiliate::AffiliateStatus;

    #[test]
    fn test_operation_routes() {
        let req = MutationRequest::new("withdrawals", "17", Operation::Approve);
        assert_eq!(req.method(), HttpMethod::Post);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/withdrawals/17/approve"
        );

        let req = MutationRequest::new("users", "u 1", Operation::Delete);
        assert_eq!(req.method(), HttpMethod::Delete);
        assert_eq!(
            req.path_with(|s| s.replace(' ', "%20")),
            "/api/admin/users/u%201"
        );

        let req = MutationRequest::new("withdrawals", "3", Operation::UpdateTransactionId);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/withdrawals/3/update-transaction-id"
        );
    }

    #[test]
    fn test_in_flight_keys_are_per_row() {
        let a = MutationRequest::new("withdrawals", "1", Operation::Approve).in_flight_key();
        let b = MutationRequest::new("withdrawals", "2", Operation::Approve).in_flight_key();

        let mut in_flight = InFlight::default();
        assert!(in_flight.try_begin(&a));
        assert!(!in_flight.try_begin(&a));
        assert!(in_flight.try_begin(&b));

        in_flight.finish(&a);
        assert!(in_flight.try_begin(&a));
    }

    #[test]
    fn test_status_change_disabled_when_unchanged() {
        let mut form = StatusChangeForm::new("affiliates", AffiliateStatus::Active);
        assert!(!form.can_submit());
        assert_eq!(form.to_request("9"), Err(ValidationError::Unchanged));

        form.proposed = AffiliateStatus::Suspended;
        assert!(form.can_submit());
        let req = form.to_request("9").unwrap();
        assert_eq!(req.operation, Operation::ChangeStatus);
        assert_eq!(req.payload, Some(json!({ "status": "suspended" })));

        form.reset();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_decline_requires_reason() {
        let mut form = DeclineForm::new("cancel-requests", "declined");
        assert!(!form.can_submit());
        form.reason = "   ".into();
        assert!(!form.can_submit());

        form.reason = "Order already delivered".into();
        let req = form.to_request("55").unwrap();
        assert_eq!(req.method(), HttpMethod::Patch);
        assert_eq!(
            req.payload,
            Some(json!({ "status": "declined", "reason": "Order already delivered" }))
        );
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut dialog = DialogLifecycle::default();
        assert!(!dialog.begin_submit());

        dialog.open();
        assert!(dialog.begin_submit());
        assert!(!dialog.begin_submit());
        dialog.close();
        assert!(dialog.is_open(), "close is ignored while submitting");

        dialog.fail("Insufficient provider balance");
        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Insufficient provider balance"));

        assert!(dialog.begin_submit());
        dialog.succeed();
        assert!(!dialog.is_open());
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn test_bulk_actions_send_nothing() {
        let BulkOutcome::Unsupported { message } = BulkAction::Approve.dispatch(3);
        assert!(message.contains("not yet supported"));
        assert!(message.contains('3'));
    }
}
