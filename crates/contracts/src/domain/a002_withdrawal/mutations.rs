//! Dialog forms of the withdrawals page

use super::aggregate::{Withdrawal, WithdrawalStatus};
use crate::domain::common::{AdminResource, ResourceStatus};
use crate::shared::error::{parse_positive_amount, require, ValidationError};
use crate::shared::money::round2;
use crate::shared::mutation::{DeclineForm, MutationForm, MutationRequest, Operation};
use serde_json::{json, Value};

/// Approve dialog: transaction id and paid amount are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproveWithdrawalForm {
    pub requested_amount: f64,
    pub transaction_id: String,
    pub amount: String,
    pub notes: String,
}

impl ApproveWithdrawalForm {
    pub fn for_withdrawal(withdrawal: &Withdrawal) -> Self {
        Self {
            requested_amount: withdrawal.amount,
            transaction_id: withdrawal.transaction_id.clone().unwrap_or_default(),
            amount: format!("{:.2}", withdrawal.amount),
            notes: String::new(),
        }
    }
}

impl MutationForm for ApproveWithdrawalForm {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.transaction_id, "Transaction ID")?;
        let amount = parse_positive_amount(&self.amount, "Amount")?;
        if round2(amount) > round2(self.requested_amount) {
            return Err(ValidationError::Exceeds {
                field: "Amount",
                max: self.requested_amount,
            });
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let transaction_id = require(&self.transaction_id, "Transaction ID")?;
        let amount = parse_positive_amount(&self.amount, "Amount")?;
        let mut payload = json!({
            "transactionId": transaction_id,
            "amount": round2(amount),
        });
        let notes = self.notes.trim();
        if !notes.is_empty() {
            payload["adminNotes"] = Value::String(notes.to_string());
        }
        Ok(
            MutationRequest::new(Withdrawal::COLLECTION, resource_id, Operation::Approve)
                .with_payload(payload),
        )
    }

    fn reset(&mut self) {
        self.transaction_id.clear();
        self.amount.clear();
        self.notes.clear();
    }
}

/// Correction of the transaction id on an approved withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTransactionIdForm {
    pub current: String,
    pub transaction_id: String,
}

impl UpdateTransactionIdForm {
    pub fn for_withdrawal(withdrawal: &Withdrawal) -> Self {
        let current = withdrawal.transaction_id.clone().unwrap_or_default();
        Self {
            transaction_id: current.clone(),
            current,
        }
    }
}

impl MutationForm for UpdateTransactionIdForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let value = require(&self.transaction_id, "Transaction ID")?;
        if value == self.current.trim() {
            return Err(ValidationError::Unchanged);
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        Ok(MutationRequest::new(
            Withdrawal::COLLECTION,
            resource_id,
            Operation::UpdateTransactionId,
        )
        .with_payload(json!({ "transactionId": self.transaction_id.trim() })))
    }

    fn reset(&mut self) {
        self.transaction_id = self.current.clone();
    }
}

/// Cancel confirmation; the reason is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CancelWithdrawalForm {
    pub reason: String,
}

impl MutationForm for CancelWithdrawalForm {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        let request = MutationRequest::new(Withdrawal::COLLECTION, resource_id, Operation::Cancel);
        let reason = self.reason.trim();
        Ok(if reason.is_empty() {
            request
        } else {
            request.with_payload(json!({ "reason": reason }))
        })
    }

    fn reset(&mut self) {
        self.reason.clear();
    }
}

pub fn decline_form() -> DeclineForm {
    DeclineForm::new(Withdrawal::COLLECTION, WithdrawalStatus::Rejected.as_str())
}

/// Local overlay shown while the cancel request is in flight.
pub fn apply_optimistic_cancel(withdrawal: &mut Withdrawal) {
    withdrawal.status = WithdrawalStatus::Cancelled;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::HttpMethod;
    use chrono::Utc;

    fn withdrawal() -> Withdrawal {
        Withdrawal {
            id: "7".into(),
            user_id: None,
            username: "alex".into(),
            email: None,
            amount: 50.0,
            method: "paypal".into(),
            account_details: None,
            status: WithdrawalStatus::Pending,
            transaction_id: None,
            admin_notes: None,
            rejection_reason: None,
            created_at: Utc::now(),
            processed_at: None,
        }
    }

    #[test]
    fn test_approve_with_empty_transaction_id_is_never_sent() {
        let form = ApproveWithdrawalForm::for_withdrawal(&withdrawal());
        assert!(!form.can_submit());
        assert_eq!(
            form.to_request("7"),
            Err(ValidationError::Required("Transaction ID"))
        );
    }

    #[test]
    fn test_approve_request() {
        let mut form = ApproveWithdrawalForm::for_withdrawal(&withdrawal());
        form.transaction_id = " PP-1234 ".into();
        assert!(form.can_submit());

        let req = form.to_request("7").unwrap();
        assert_eq!(req.method(), HttpMethod::Post);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/withdrawals/7/approve"
        );
        assert_eq!(
            req.payload,
            Some(json!({ "transactionId": "PP-1234", "amount": 50.0 }))
        );
    }

    #[test]
    fn test_approve_amount_rules() {
        let mut form = ApproveWithdrawalForm::for_withdrawal(&withdrawal());
        form.transaction_id = "TX".into();
        form.amount = "".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("Amount")));
        form.amount = "50.01".into();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::Exceeds { .. })
        ));
        form.amount = "49,99".into();
        assert!(form.can_submit());
    }

    #[test]
    fn test_update_transaction_id_requires_change() {
        let mut w = withdrawal();
        w.status = WithdrawalStatus::Approved;
        w.transaction_id = Some("TX-1".into());
        let mut form = UpdateTransactionIdForm::for_withdrawal(&w);
        assert_eq!(form.validate(), Err(ValidationError::Unchanged));
        form.transaction_id = "TX-2".into();
        let req = form.to_request("7").unwrap();
        assert_eq!(req.payload, Some(json!({ "transactionId": "TX-2" })));
    }

    #[test]
    fn test_decline_marks_rejected() {
        let mut form = decline_form();
        form.reason = "Suspicious activity".into();
        let req = form.to_request("7").unwrap();
        assert_eq!(req.payload.unwrap()["status"], "rejected");
    }

    #[test]
    fn test_cancel_and_optimistic_overlay() {
        let req = CancelWithdrawalForm::default().to_request("7").unwrap();
        assert_eq!(req.payload, None);
        assert_eq!(req.path_with(|s| s.to_string()), "/api/admin/withdrawals/7/cancel");

        let mut w = withdrawal();
        apply_optimistic_cancel(&mut w);
        assert_eq!(w.status, WithdrawalStatus::Cancelled);
    }
}
