use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Affiliates,
    Withdrawals,
    CancelRequests,
    Users,
    Moderators,
    Services,
    ServiceImport,
}

impl AdminSection {
    pub const ALL: [AdminSection; 7] = [
        AdminSection::Affiliates,
        AdminSection::Withdrawals,
        AdminSection::CancelRequests,
        AdminSection::Users,
        AdminSection::Moderators,
        AdminSection::Services,
        AdminSection::ServiceImport,
    ];

    /// Value of the `?section=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            AdminSection::Affiliates => "affiliates",
            AdminSection::Withdrawals => "withdrawals",
            AdminSection::CancelRequests => "cancel-requests",
            AdminSection::Users => "users",
            AdminSection::Moderators => "moderators",
            AdminSection::Services => "services",
            AdminSection::ServiceImport => "import",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Affiliates => "Affiliates",
            AdminSection::Withdrawals => "Withdrawals",
            AdminSection::CancelRequests => "Cancel requests",
            AdminSection::Users => "Users",
            AdminSection::Moderators => "Moderators",
            AdminSection::Services => "Services",
            AdminSection::ServiceImport => "Import services",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminSection::Affiliates => "affiliates",
            AdminSection::Withdrawals => "wallet",
            AdminSection::CancelRequests => "x-circle",
            AdminSection::Users => "users",
            AdminSection::Moderators => "shield",
            AdminSection::Services => "layers",
            AdminSection::ServiceImport => "import",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AdminSection>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AdminSection::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the section from `?section=` and keeps the query string in
    /// sync with later navigation.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("section").and_then(|k| AdminSection::from_key(k)) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("section", section.key())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, section: AdminSection) {
        log::debug!("open section '{}'", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in AdminSection::ALL {
            assert_eq!(AdminSection::from_key(section.key()), Some(section));
        }
        assert_eq!(AdminSection::from_key("orders"), None);
    }
}
