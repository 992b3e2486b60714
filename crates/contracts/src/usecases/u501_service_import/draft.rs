use super::provider::ProviderService;
use super::request::{ImportItem, ImportRequest};
use crate::shared::error::ValidationError;
use crate::shared::grouping::{group_by_category, CategoryGroup, CollapsedCategories};
use crate::shared::money::sale_price;
use crate::shared::selection::{CheckState, Selection};
use std::collections::BTreeMap;

/// Sparse per-row edits. `None` falls back to the fetched value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceOverride {
    pub name: Option<String>,
    pub description: Option<String>,
    pub profit_percent: Option<f64>,
}

impl ServiceOverride {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.profit_percent.is_none()
    }
}

/// Working copy of one import: the provider's services as fetched, plus
/// everything the admin changed on top of them.
///
/// Display values are `override ?? original`; the originals are never
/// rewritten, and overrides only leave this struct in [`ImportDraft::to_import_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDraft {
    services: Vec<ProviderService>,
    overrides: BTreeMap<String, ServiceOverride>,
    category_percents: BTreeMap<String, f64>,
    default_profit_percent: f64,
    selection: Selection,
    collapsed: CollapsedCategories,
}

impl ImportDraft {
    pub fn new(services: Vec<ProviderService>, default_profit_percent: f64) -> Self {
        Self {
            services,
            overrides: BTreeMap::new(),
            category_percents: BTreeMap::new(),
            default_profit_percent: default_profit_percent.max(0.0),
            selection: Selection::new(),
            collapsed: CollapsedCategories::default(),
        }
    }

    pub fn services(&self) -> &[ProviderService] {
        &self.services
    }

    pub fn service(&self, id: &str) -> Option<&ProviderService> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn override_for(&self, id: &str) -> Option<&ServiceOverride> {
        self.overrides.get(id)
    }

    pub fn groups(&self) -> Vec<CategoryGroup<'_, ProviderService>> {
        group_by_category(&self.services, |s| s.category.as_str())
    }

    // ------------------------------------------------------------------
    // Overlaid values
    // ------------------------------------------------------------------

    pub fn current_name(&self, id: &str) -> Option<&str> {
        let original = self.service(id)?;
        Some(
            self.overrides
                .get(id)
                .and_then(|o| o.name.as_deref())
                .unwrap_or(&original.name),
        )
    }

    pub fn current_description(&self, id: &str) -> Option<&str> {
        let original = self.service(id)?;
        self.overrides
            .get(id)
            .and_then(|o| o.description.as_deref())
            .or(original.description.as_deref())
    }

    /// Row override, then category percent, then the default.
    pub fn profit_percent(&self, id: &str) -> f64 {
        if let Some(pct) = self.overrides.get(id).and_then(|o| o.profit_percent) {
            return pct;
        }
        self.service(id)
            .and_then(|s| self.category_percents.get(&s.category).copied())
            .unwrap_or(self.default_profit_percent)
    }

    pub fn category_percent(&self, category: &str) -> f64 {
        self.category_percents
            .get(category)
            .copied()
            .unwrap_or(self.default_profit_percent)
    }

    /// Live sale price from the untouched provider rate.
    pub fn sale_price(&self, id: &str) -> Option<f64> {
        let service = self.service(id)?;
        Some(sale_price(service.rate, self.profit_percent(id)))
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, id: &str, name: &str) {
        let Some(original) = self.service(id) else {
            return;
        };
        let value = (name != original.name).then(|| name.to_string());
        self.edit(id, |o| o.name = value);
    }

    pub fn set_description(&mut self, id: &str, description: &str) {
        let Some(original) = self.service(id) else {
            return;
        };
        let unchanged = description == original.description.as_deref().unwrap_or_default();
        let value = (!unchanged).then(|| description.to_string());
        self.edit(id, |o| o.description = value);
    }

    pub fn set_profit_percent(&mut self, id: &str, percent: f64) {
        if self.service(id).is_none() {
            return;
        }
        let percent = percent.max(0.0);
        self.edit(id, |o| o.profit_percent = Some(percent));
    }

    /// Applies one percent to a whole category; row-level percents inside it
    /// are dropped so the category value takes effect everywhere.
    pub fn set_category_percent(&mut self, category: &str, percent: f64) {
        self.category_percents
            .insert(category.to_string(), percent.max(0.0));
        let ids: Vec<String> = self
            .services
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.id.clone())
            .collect();
        for id in ids {
            self.edit(&id, |o| o.profit_percent = None);
        }
    }

    pub fn revert(&mut self, id: &str) {
        self.overrides.remove(id);
    }

    fn edit<F>(&mut self, id: &str, f: F)
    where
        F: FnOnce(&mut ServiceOverride),
    {
        let entry = self.overrides.entry(id.to_string()).or_default();
        f(entry);
        if entry.is_empty() {
            self.overrides.remove(id);
        }
    }

    // ------------------------------------------------------------------
    // Selection and collapse
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn set_selected(&mut self, id: &str, checked: bool) {
        if self.service(id).is_some() {
            self.selection.set(id, checked);
        }
    }

    pub fn toggle_all(&mut self) {
        let ids: Vec<String> = self.services.iter().map(|s| s.id.clone()).collect();
        self.selection.toggle_all(ids);
    }

    pub fn all_state(&self) -> CheckState {
        self.selection
            .check_state(self.services.iter().map(|s| s.id.as_str()))
    }

    pub fn toggle_category(&mut self, category: &str) {
        let ids: Vec<String> = self
            .services
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.id.clone())
            .collect();
        self.selection.toggle_group(ids);
    }

    pub fn category_state(&self, category: &str) -> CheckState {
        self.selection.check_state(
            self.services
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.id.as_str()),
        )
    }

    pub fn is_collapsed(&self, category: &str) -> bool {
        self.collapsed.is_collapsed(category)
    }

    pub fn toggle_collapsed(&mut self, category: &str) {
        self.collapsed.toggle(category);
    }

    pub fn collapse_all(&mut self) {
        let categories: Vec<String> = self.groups().into_iter().map(|g| g.category).collect();
        self.collapsed.collapse_all(categories);
    }

    pub fn expand_all(&mut self) {
        self.collapsed.expand_all();
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Selected originals overlaid with their overrides, in fetch order.
    pub fn to_import_request(&self, provider_id: &str) -> Result<ImportRequest, ValidationError> {
        let services: Vec<ImportItem> = self
            .services
            .iter()
            .filter(|s| self.selection.contains(&s.id))
            .map(|s| {
                let profit_percent = self.profit_percent(&s.id);
                ImportItem {
                    provider_service_id: s.id.clone(),
                    name: self.current_name(&s.id).unwrap_or(&s.name).to_string(),
                    description: self.current_description(&s.id).map(str::to_string),
                    category: s.category.clone(),
                    provider_rate: s.rate,
                    rate: sale_price(s.rate, profit_percent),
                    profit_percent,
                    min: s.min,
                    max: s.max,
                }
            })
            .collect();
        if services.is_empty() {
            return Err(ValidationError::Required("Services"));
        }
        Ok(ImportRequest {
            provider_id: provider_id.to_string(),
            services,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, category: &str, rate: f64) -> ProviderService {
        ProviderService {
            id: id.into(),
            name: format!("Service {}", id),
            description: None,
            category: category.into(),
            rate,
            min: 10,
            max: 10_000,
            service_type: None,
        }
    }

    fn draft() -> ImportDraft {
        ImportDraft::new(
            vec![
                service("1", "Instagram", 1.00),
                service("2", "YouTube", 2.00),
                service("3", "Instagram", 0.40),
            ],
            20.0,
        )
    }

    #[test]
    fn test_profit_recompute_keeps_provider_rate() {
        let mut d = draft();
        d.set_profit_percent("1", 10.0);
        assert_eq!(d.sale_price("1"), Some(1.10));
        assert_eq!(d.service("1").map(|s| s.rate), Some(1.00));

        d.set_profit_percent("1", 25.0);
        assert_eq!(d.sale_price("1"), Some(1.25));
        assert_eq!(d.service("1").map(|s| s.rate), Some(1.00));
    }

    #[test]
    fn test_percent_precedence() {
        let mut d = draft();
        assert_eq!(d.profit_percent("2"), 20.0);

        d.set_profit_percent("1", 5.0);
        d.set_category_percent("Instagram", 25.0);
        assert_eq!(d.profit_percent("1"), 25.0);
        assert_eq!(d.profit_percent("3"), 25.0);
        assert_eq!(d.sale_price("3"), Some(0.50));
        assert_eq!(d.profit_percent("2"), 20.0);

        d.set_profit_percent("3", 50.0);
        assert_eq!(d.profit_percent("3"), 50.0);
    }

    #[test]
    fn test_overrides_are_not_merged_into_originals() {
        let mut d = draft();
        d.set_name("2", "YT Views HQ");
        d.set_description("2", "Fast start");
        assert_eq!(d.current_name("2"), Some("YT Views HQ"));
        assert_eq!(d.current_description("2"), Some("Fast start"));
        assert_eq!(d.service("2").map(|s| s.name.as_str()), Some("Service 2"));
        assert_eq!(d.service("2").and_then(|s| s.description.clone()), None);

        d.set_name("2", "Service 2");
        d.set_description("2", "");
        d.revert("2");
        assert!(d.override_for("2").is_none());
        assert_eq!(d.current_name("2"), Some("Service 2"));
    }

    #[test]
    fn test_override_map_stays_sparse() {
        let mut d = draft();
        d.set_name("1", "Service 1");
        assert!(d.override_for("1").is_none());
        d.set_name("missing", "x");
        assert!(d.override_for("missing").is_none());
    }

    #[test]
    fn test_groups_and_category_selection() {
        let mut d = draft();
        let groups = d.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Instagram");
        assert_eq!(groups[0].items.len(), 2);

        d.set_selected("1", true);
        assert_eq!(d.category_state("Instagram"), CheckState::Indeterminate);
        d.toggle_category("Instagram");
        assert_eq!(d.category_state("Instagram"), CheckState::Checked);
        assert_eq!(d.category_state("YouTube"), CheckState::Unchecked);
        d.toggle_category("Instagram");
        assert_eq!(d.selected_count(), 0);

        d.toggle_all();
        assert_eq!(d.all_state(), CheckState::Checked);
        d.toggle_all();
        assert_eq!(d.selected_count(), 0);

        d.collapse_all();
        assert!(d.is_collapsed("YouTube"));
        d.toggle_collapsed("YouTube");
        assert!(!d.is_collapsed("YouTube"));
    }

    #[test]
    fn test_import_request_overlays_overrides() {
        let mut d = draft();
        assert_eq!(
            d.to_import_request("p1"),
            Err(ValidationError::Required("Services"))
        );

        d.set_selected("3", true);
        d.set_selected("1", true);
        d.set_name("3", "IG Likes");
        d.set_profit_percent("1", 10.0);

        let req = d.to_import_request("p1").unwrap();
        assert_eq!(req.provider_id, "p1");
        let ids: Vec<_> = req
            .services
            .iter()
            .map(|i| i.provider_service_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(req.services[0].rate, 1.10);
        assert_eq!(req.services[0].provider_rate, 1.00);
        assert_eq!(req.services[1].name, "IG Likes");
        assert_eq!(req.services[1].rate, 0.48);
    }
}
