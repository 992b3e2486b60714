//! Import of upstream provider services into the panel's catalogue.

pub mod draft;
pub mod provider;
pub mod request;
pub mod wizard;

pub use draft::{ImportDraft, ServiceOverride};
pub use provider::{ProviderInfo, ProviderService};
pub use request::{ImportItem, ImportRequest, ImportResult};
pub use wizard::{ImportStep, ImportWizard};

use crate::usecases::common::UseCaseMetadata;

pub struct ServiceImport;

impl UseCaseMetadata for ServiceImport {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "service_import"
    }

    fn display_name() -> &'static str {
        "Import services"
    }

    fn description() -> &'static str {
        "Pick provider services, set a profit margin and add them to the catalogue"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ServiceImport::full_name(), "u501_service_import");
    }
}
