//! Dialog forms of the users page

use super::aggregate::{User, UserStatus};
use crate::domain::common::AdminResource;
use crate::shared::error::{parse_non_negative_amount, parse_percent, ValidationError};
use crate::shared::money::round2;
use crate::shared::mutation::{
    DeleteForm, MutationForm, MutationRequest, Operation, StatusChangeForm,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceForm {
    pub current: f64,
    pub balance: String,
}

impl BalanceForm {
    pub fn for_user(user: &User) -> Self {
        Self {
            current: user.balance,
            balance: format!("{:.2}", user.balance),
        }
    }
}

impl MutationForm for BalanceForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let balance = parse_non_negative_amount(&self.balance, "Balance")?;
        if round2(balance) == round2(self.current) {
            return Err(ValidationError::Unchanged);
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let balance = parse_non_negative_amount(&self.balance, "Balance")?;
        Ok(
            MutationRequest::new(User::COLLECTION, resource_id, Operation::SetBalance)
                .with_payload(json!({ "balance": round2(balance) })),
        )
    }

    fn reset(&mut self) {
        self.balance = format!("{:.2}", self.current);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountForm {
    pub current: f64,
    pub discount: String,
}

impl DiscountForm {
    pub fn for_user(user: &User) -> Self {
        Self {
            current: user.discount,
            discount: user.discount.to_string(),
        }
    }
}

impl MutationForm for DiscountForm {
    fn validate(&self) -> Result<(), ValidationError> {
        let discount = parse_percent(&self.discount, "Discount")?;
        if round2(discount) == round2(self.current) {
            return Err(ValidationError::Unchanged);
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        let discount = parse_percent(&self.discount, "Discount")?;
        Ok(
            MutationRequest::new(User::COLLECTION, resource_id, Operation::SetDiscount)
                .with_payload(json!({ "discount": round2(discount) })),
        )
    }

    fn reset(&mut self) {
        self.discount = self.current.to_string();
    }
}

pub fn status_form(user: &User) -> StatusChangeForm<UserStatus> {
    StatusChangeForm::new(User::COLLECTION, user.status)
}

pub fn delete_form() -> DeleteForm {
    DeleteForm {
        collection: User::COLLECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::HttpMethod;

    #[test]
    fn test_balance_form() {
        let mut form = BalanceForm {
            current: 10.0,
            balance: "10.00".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Unchanged));

        form.balance = "0".into();
        let req = form.to_request("u1").unwrap();
        assert_eq!(req.method(), HttpMethod::Patch);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/users/u1/balance"
        );
        assert_eq!(req.payload, Some(json!({ "balance": 0.0 })));

        form.balance = "-5".into();
        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidNumber("Balance"))
        );
    }

    #[test]
    fn test_discount_range() {
        let mut form = DiscountForm {
            current: 0.0,
            discount: "0".into(),
        };
        assert!(!form.can_submit());
        form.discount = "15".into();
        let req = form.to_request("u1").unwrap();
        assert_eq!(req.payload, Some(json!({ "discount": 15.0 })));
        form.discount = "150".into();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::OutOfRange { min: 0, max: 100, .. })
        ));
    }

    #[test]
    fn test_delete_targets_resource() {
        let req = delete_form().to_request("u1").unwrap();
        assert_eq!(req.method(), HttpMethod::Delete);
        assert_eq!(req.path_with(|s| s.to_string()), "/api/admin/users/u1");
        assert_eq!(req.payload, None);
    }
}
