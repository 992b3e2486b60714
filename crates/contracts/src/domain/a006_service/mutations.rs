//! Dialog forms of the services page

use super::aggregate::{Service, ServiceStatus};
use crate::domain::common::AdminResource;
use crate::shared::mutation::{DeleteForm, StatusChangeForm};

pub fn status_form(service: &Service) -> StatusChangeForm<ServiceStatus> {
    StatusChangeForm::new(Service::COLLECTION, service.status)
}

pub fn delete_form() -> DeleteForm {
    DeleteForm {
        collection: Service::COLLECTION,
    }
}
