use super::draft::ImportDraft;
use super::provider::{ProviderInfo, ProviderService};
use super::request::{ImportRequest, ImportResult};
use crate::shared::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStep {
    SelectProvider,
    SelectServices,
    Pricing,
    Review,
    Done,
}

impl ImportStep {
    pub const ALL: [ImportStep; 5] = [
        ImportStep::SelectProvider,
        ImportStep::SelectServices,
        ImportStep::Pricing,
        ImportStep::Review,
        ImportStep::Done,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ImportStep::SelectProvider => "Provider",
            ImportStep::SelectServices => "Services",
            ImportStep::Pricing => "Pricing",
            ImportStep::Review => "Review",
            ImportStep::Done => "Done",
        }
    }

    /// 1-based position for the step indicator.
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }
}

/// Step machine of the import screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportWizard {
    step: ImportStep,
    provider: Option<ProviderInfo>,
    draft: Option<ImportDraft>,
    result: Option<ImportResult>,
    default_profit_percent: f64,
}

impl ImportWizard {
    pub fn new(default_profit_percent: f64) -> Self {
        Self {
            step: ImportStep::SelectProvider,
            provider: None,
            draft: None,
            result: None,
            default_profit_percent,
        }
    }

    pub fn step(&self) -> ImportStep {
        self.step
    }

    pub fn provider(&self) -> Option<&ProviderInfo> {
        self.provider.as_ref()
    }

    pub fn draft(&self) -> Option<&ImportDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut ImportDraft> {
        self.draft.as_mut()
    }

    pub fn result(&self) -> Option<&ImportResult> {
        self.result.as_ref()
    }

    /// Picking another provider discards the previous draft.
    pub fn select_provider(&mut self, provider: ProviderInfo) {
        let same = self.provider.as_ref().map(|p| p.id == provider.id) == Some(true);
        if !same {
            self.draft = None;
        }
        self.provider = Some(provider);
    }

    /// Ignored when the provider changed while the services were loading.
    pub fn services_loaded(&mut self, provider_id: &str, services: Vec<ProviderService>) -> bool {
        if self.provider.as_ref().map(|p| p.id.as_str()) != Some(provider_id) {
            return false;
        }
        self.draft = Some(ImportDraft::new(services, self.default_profit_percent));
        true
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            ImportStep::SelectProvider => self.provider.is_some() && self.draft.is_some(),
            ImportStep::SelectServices | ImportStep::Pricing => self
                .draft
                .as_ref()
                .is_some_and(|d| d.selected_count() > 0),
            ImportStep::Review | ImportStep::Done => false,
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            ImportStep::SelectProvider => ImportStep::SelectServices,
            ImportStep::SelectServices => ImportStep::Pricing,
            ImportStep::Pricing => ImportStep::Review,
            other => other,
        };
        true
    }

    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            ImportStep::SelectServices => ImportStep::SelectProvider,
            ImportStep::Pricing => ImportStep::SelectServices,
            ImportStep::Review => ImportStep::Pricing,
            ImportStep::SelectProvider | ImportStep::Done => return false,
        };
        self.step = previous;
        true
    }

    /// Payload for the final submit; only valid on the review step.
    pub fn import_request(&self) -> Result<ImportRequest, ValidationError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ValidationError::Required("Provider"))?;
        let draft = self
            .draft
            .as_ref()
            .ok_or(ValidationError::Required("Services"))?;
        draft.to_import_request(&provider.id)
    }

    pub fn finish(&mut self, result: ImportResult) {
        self.result = Some(result);
        self.step = ImportStep::Done;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_profit_percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str) -> ProviderInfo {
        ProviderInfo {
            id: id.into(),
            name: format!("Provider {}", id),
            balance: Some(100.0),
            currency: Some("USD".into()),
            services_count: None,
        }
    }

    fn services() -> Vec<ProviderService> {
        serde_json::from_value(serde_json::json!([
            { "id": 1, "name": "IG Followers", "category": "Instagram", "rate": 1.0 },
            { "id": 2, "name": "YT Views", "category": "YouTube", "rate": 2.0 }
        ]))
        .unwrap()
    }

    #[test]
    fn test_happy_path() {
        let mut w = ImportWizard::new(10.0);
        assert!(!w.next());

        w.select_provider(provider("p1"));
        assert!(!w.can_advance());
        assert!(w.services_loaded("p1", services()));
        assert!(w.next());
        assert_eq!(w.step(), ImportStep::SelectServices);

        assert!(!w.next(), "nothing selected yet");
        if let Some(d) = w.draft_mut() {
            d.set_selected("1", true);
        }
        assert!(w.next());
        assert!(w.next());
        assert_eq!(w.step(), ImportStep::Review);
        assert!(!w.next());

        let req = w.import_request().unwrap();
        assert_eq!(req.services.len(), 1);
        assert_eq!(req.services[0].rate, 1.10);

        w.finish(ImportResult {
            imported: 1,
            ..ImportResult::default()
        });
        assert_eq!(w.step(), ImportStep::Done);
        assert!(!w.back());

        w.reset();
        assert_eq!(w.step(), ImportStep::SelectProvider);
        assert!(w.provider().is_none());
    }

    #[test]
    fn test_late_services_for_other_provider_are_ignored() {
        let mut w = ImportWizard::new(10.0);
        w.select_provider(provider("p1"));
        w.select_provider(provider("p2"));
        assert!(!w.services_loaded("p1", services()));
        assert!(w.draft().is_none());
    }

    #[test]
    fn test_back_keeps_draft() {
        let mut w = ImportWizard::new(10.0);
        w.select_provider(provider("p1"));
        w.services_loaded("p1", services());
        w.next();
        if let Some(d) = w.draft_mut() {
            d.set_profit_percent("2", 30.0);
        }
        assert!(w.back());
        assert_eq!(w.step(), ImportStep::SelectProvider);
        assert_eq!(w.draft().map(|d| d.profit_percent("2")), Some(30.0));
        assert_eq!(ImportStep::Review.number(), 4);
    }
}
