//! Dialog forms of the affiliates page

use super::aggregate::{Affiliate, AffiliateStatus};
use crate::domain::common::AdminResource;
use crate::shared::error::{parse_positive_amount, ValidationError};
use crate::shared::money::round2;
use crate::shared::mutation::{MutationForm, MutationRequest, Operation, StatusChangeForm};
use serde_json::{json, Value};

/// Manual payout of an affiliate's available balance.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutForm {
    pub available: f64,
    pub amount: String,
    pub method: String,
    pub notes: String,
}

impl PayoutForm {
    pub fn for_affiliate(affiliate: &Affiliate) -> Self {
        Self {
            available: affiliate.available_balance,
            amount: format!("{:.2}", affiliate.available_balance),
            method: affiliate.payment_method.clone().unwrap_or_default(),
            notes: String::new(),
        }
    }
}

impl MutationForm for PayoutForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let amount = parse_positive_amount(&self.amount, "Amount")?;
        if round2(amount) > round2(self.available) {
            return Err(ValidationError::Exceeds {
                field: "Amount",
                max: self.available,
            });
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let amount = parse_positive_amount(&self.amount, "Amount")?;
        let mut payload = json!({ "amount": round2(amount) });
        if !self.method.trim().is_empty() {
            payload["method"] = Value::String(self.method.trim().to_string());
        }
        if !self.notes.trim().is_empty() {
            payload["notes"] = Value::String(self.notes.trim().to_string());
        }
        Ok(
            MutationRequest::new(Affiliate::COLLECTION, resource_id, Operation::ProcessPayout)
                .with_payload(payload),
        )
    }

    fn reset(&mut self) {
        self.amount.clear();
        self.notes.clear();
    }
}

pub fn status_form(affiliate: &Affiliate) -> StatusChangeForm<AffiliateStatus> {
    StatusChangeForm::new(Affiliate::COLLECTION, affiliate.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::HttpMethod;

    fn form(available: f64, amount: &str) -> PayoutForm {
        PayoutForm {
            available,
            amount: amount.into(),
            method: "paypal".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_payout_cannot_exceed_available_balance() {
        assert!(form(100.0, "100").can_submit());
        assert!(matches!(
            form(100.0, "100.5").validate(),
            Err(ValidationError::Exceeds { .. })
        ));
        assert_eq!(
            form(100.0, "").validate(),
            Err(ValidationError::Required("Amount"))
        );
    }

    #[test]
    fn test_payout_request() {
        let req = form(80.0, "25.5").to_request("af_1").unwrap();
        assert_eq!(req.method(), HttpMethod::Post);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/affiliates/af_1/payout"
        );
        assert_eq!(
            req.payload,
            Some(json!({ "amount": 25.5, "method": "paypal" }))
        );
    }
}
