use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings of the admin panel, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Port of the admin API on the page's host.
    pub port: u16,
    /// Full base URL; overrides host and port when set.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    /// Limit sent when the user picks "show all".
    pub show_all_cap: u32,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_ms: u32,
    pub default_profit_percent: f64,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[list]
default_page_size = 25
page_size_options = [10, 25, 50, 100]
show_all_cap = 1000
search_debounce_ms = 500

[ui]
toast_ms = 4000
default_profit_percent = 20.0
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            base_url: None,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            page_size_options: vec![10, 25, 50, 100],
            show_all_cap: 1000,
            search_debounce_ms: 500,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: 4000,
            default_profit_percent: 20.0,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AdminConfig {
    pub fn embedded() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parses an override; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AdminConfig = toml::from_str(contents)?;
        config.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.list.show_all_cap == 0 {
            return Err(ConfigError::Invalid("list.show_all_cap must be positive".into()));
        }
        if self.list.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "list.default_page_size must be positive".into(),
            ));
        }
        if self.list.page_size_options.iter().any(|n| *n == 0) {
            return Err(ConfigError::Invalid(
                "list.page_size_options must be positive".into(),
            ));
        }
        if !(0.0..=1000.0).contains(&self.ui.default_profit_percent) {
            return Err(ConfigError::Invalid(
                "ui.default_profit_percent is out of range".into(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AdminConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.list.show_all_cap, 1000);
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AdminConfig::from_toml_str("[list]\nshow_all_cap = 5000\n").unwrap();
        assert_eq!(config.list.show_all_cap, 5000);
        assert_eq!(config.list.default_page_size, 25);
        assert_eq!(config.ui.toast_ms, 4000);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            AdminConfig::from_toml_str("[list]\nshow_all_cap = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AdminConfig::from_toml_str("[list]\nshow_all_cap = \"lots\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
