use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session user.
pub const DEFAULT_SESSION_KEY: &str = "civicvoice_user";
/// Storage key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "civicvoice_theme";

/// Keys used in the browser key-value store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub session_key: String,
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

/// Presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// `"light"` or `"dark"`, used when nothing is persisted.
    pub default_theme: String,
    /// Chart container height in pixels.
    pub chart_height: u32,
    /// Tallest bar as a percentage of the chart height.
    pub bar_ceiling: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: "dark".to_string(),
            chart_height: 200,
            bar_ceiling: 80.0,
        }
    }
}

/// Feature flags controlling optional dashboard surfaces.
///
/// Unlike the storage and UI sections, every flag defaults to enabled so a
/// missing config file still shows the full dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureFlags {
    pub csv_export: bool,
    pub system_settings: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            csv_export: true,
            system_settings: true,
        }
    }
}

/// Top-level config file structure matching `civicvoice.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Parse a TOML document, falling back to defaults on malformed input.
    pub fn from_toml_or_default(source: &str) -> Self {
        match toml::from_str(source) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "invalid civicvoice config, using defaults");
                Self::default()
            }
        }
    }
}
