//! Runtime configuration of the admin panel.
//!
//! The embedded default can be overridden per browser by storing a TOML
//! document under `localStorage["smm_admin_config"]`.

use contracts::shared::config::AdminConfig;
use leptos::prelude::*;
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "smm_admin_config";

/// Loads the override from localStorage, falling back to the embedded default.
pub fn load_config() -> AdminConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(contents) => match AdminConfig::from_toml_str(&contents) {
            Ok(config) => {
                log::info!("Using config override from localStorage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring stored config: {}", e);
                AdminConfig::embedded()
            }
        },
        None => AdminConfig::embedded(),
    }
}

/// Config provided by `App`.
pub fn use_config() -> AdminConfig {
    use_context::<StoredValue<AdminConfig>>()
        .map(|c| c.get_value())
        .unwrap_or_else(AdminConfig::embedded)
}
