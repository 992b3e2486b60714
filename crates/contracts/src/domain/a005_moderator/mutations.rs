//! Dialog forms of the moderators page

use super::aggregate::{Moderator, ModeratorRole, ModeratorStatus};
use crate::domain::common::AdminResource;
use crate::shared::error::ValidationError;
use crate::shared::mutation::{
    DeleteForm, MutationForm, MutationRequest, Operation, StatusChangeForm,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct RoleChangeForm {
    pub current: ModeratorRole,
    pub proposed: ModeratorRole,
}

impl RoleChangeForm {
    pub fn for_moderator(moderator: &Moderator) -> Self {
        Self {
            current: moderator.role,
            proposed: moderator.role,
        }
    }
}

impl MutationForm for RoleChangeForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.proposed == self.current {
            return Err(ValidationError::Unchanged);
        }
        Ok(())
    }

    fn to_request(&self, resource_id: &str) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        Ok(
            MutationRequest::new(Moderator::COLLECTION, resource_id, Operation::ChangeRole)
                .with_payload(json!({ "role": self.proposed.as_str() })),
        )
    }

    fn reset(&mut self) {
        self.proposed = self.current;
    }
}

pub fn status_form(moderator: &Moderator) -> StatusChangeForm<ModeratorStatus> {
    StatusChangeForm::new(Moderator::COLLECTION, moderator.status)
}

pub fn delete_form() -> DeleteForm {
    DeleteForm {
        collection: Moderator::COLLECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::HttpMethod;

    #[test]
    fn test_role_change() {
        let mut form = RoleChangeForm {
            current: ModeratorRole::Moderator,
            proposed: ModeratorRole::Moderator,
        };
        assert!(!form.can_submit());

        form.proposed = ModeratorRole::Admin;
        let req = form.to_request("3").unwrap();
        assert_eq!(req.method(), HttpMethod::Patch);
        assert_eq!(
            req.path_with(|s| s.to_string()),
            "/api/admin/moderators/3/role"
        );
        assert_eq!(req.payload, Some(json!({ "role": "admin" })));

        form.reset();
        assert_eq!(form.proposed, ModeratorRole::Moderator);
    }
}
