//! Dialog forms of the cancel requests page

use super::aggregate::{CancelRequest, CancelRequestStatus};
use crate::domain::common::{AdminResource, ResourceStatus};
use crate::shared::error::{parse_positive_amount, require, ValidationError};
use crate::shared::money::round2;
use crate::shared::mutation::{DeclineForm, MutationForm, MutationRequest, Operation};
use serde_json::{json, Value};

/// Approve dialog: the refund amount and the refund transaction id are
/// mandatory; the refund cannot exceed the order charge.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveCancelForm {
    pub charge: f64,
    pub refund_amount: String,
    pub transaction_id: String,
    pub notes: String,
}

impl ApproveCancelForm {
    pub fn for_request(request: &CancelRequest) -> Self {
        Self {
            charge: request.charge,
            refund_amount: format!("{:.2}", request.refund_amount.unwrap_or(request.charge)),
            transaction_id: String::new(),
            notes: String::new(),
        }
    }
}

impl MutationForm for ApproveCancelForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let refund = parse_positive_amount(&self.refund_amount, "Refund amount")?;
        require(&self.transaction_id, "Transaction ID")?;
        if round2(refund) > round2(self.charge) {
            return Err(ValidationError::Exceeds {
                field: "Refund amount",
                max: self.charge,
            });
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let refund = parse_positive_amount(&self.refund_amount, "Refund amount")?;
        let mut payload = json!({
            "refundAmount": round2(refund),
            "transactionId": require(&self.transaction_id, "Transaction ID")?,
        });
        if !self.notes.trim().is_empty() {
            payload["adminNotes"] = Value::String(self.notes.trim().to_string());
        }
        Ok(
            MutationRequest::new(CancelRequest::COLLECTION, resource_id, Operation::Approve)
                .with_payload(payload),
        )
    }

    fn reset(&mut self) {
        self.refund_amount.clear();
        self.transaction_id.clear();
        self.notes.clear();
    }
}

pub fn decline_form() -> DeclineForm {
    DeclineForm::new(CancelRequest::COLLECTION, CancelRequestStatus::Declined.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::HttpMethod;

    fn approve_form() -> ApproveCancelForm {
        ApproveCancelForm {
            charge: 12.0,
            refund_amount: "12.00".into(),
            transaction_id: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_approve_requires_transaction_and_amount() {
        let mut form = approve_form();
        assert!(!form.can_submit());
        form.transaction_id = "RF-88".into();
        assert!(form.can_submit());
        form.refund_amount = " ".into();
        assert!(!form.can_submit());
        form.refund_amount = "12.5".into();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::Exceeds { .. })
        ));
    }

    #[test]
    fn test_approve_request_payload() {
        let mut form = approve_form();
        form.transaction_id = "RF-88".into();
        form.notes = "partial delivery".into();
        let req = form.to_request("5").unwrap();
        assert_eq!(req.method(), HttpMethod::Post);
        assert_eq!(
            req.payload,
            Some(json!({
                "refundAmount": 12.0,
                "transactionId": "RF-88",
                "adminNotes": "partial delivery"
            }))
        );
    }

    #[test]
    fn test_decline_sends_one_patch_with_reason() {
        let mut form = decline_form();
        form.reason = "Order already completed".into();
        let req = form.to_request("5").unwrap();
        assert_eq!(req.method(), HttpMethod::Patch);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/cancel-requests/5/status"
        );
        assert_eq!(
            req.payload,
            Some(json!({ "status": "declined", "reason": "Order already completed" }))
        );
    }
}
