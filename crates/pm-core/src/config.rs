//! Configuration structures for prodman.
//!
//! This module provides configuration types for all components of the application:
//!
//! - [`CatalogConfig`] - Page size and search debounce window
//! - [`ToastConfig`] - Notification queue limits and timings
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors, default view)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`], and every section is
//! `#[serde(default)]` so a partial JSON file only overrides what it names.

use std::time::Duration;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// How the product list is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Product cards in a grid.
    #[default]
    Grid,
    /// One table row per product.
    List,
}

impl ViewMode {
    /// Switches between grid and list.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Returns a short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

/// Configuration for catalog browsing.
///
/// # Examples
///
/// ```
/// use pm_core::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.items_per_page, 8);
/// assert_eq!(config.search_debounce_ms, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of products shown per page.
    pub items_per_page: usize,

    /// Quiet period in milliseconds before search input is applied.
    pub search_debounce_ms: u64,
}

impl CatalogConfig {
    /// Returns the search debounce window as a [`Duration`].
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: 8,
            search_debounce_ms: 500,
        }
    }
}

/// Configuration for the toast notification queue.
///
/// # Examples
///
/// ```
/// use pm_core::ToastConfig;
///
/// let config = ToastConfig::default();
/// assert_eq!(config.limit, 1);
/// assert_eq!(config.remove_delay_ms, 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Maximum number of toasts kept at once. Overflow is dropped.
    pub limit: usize,

    /// Delay in milliseconds between dismissing a toast and removing it.
    pub remove_delay_ms: u64,

    /// How long in milliseconds an open toast stays visible before the UI
    /// dismisses it.
    pub display_ms: u64,
}

impl ToastConfig {
    /// Returns the removal delay as a [`Duration`].
    #[must_use]
    pub const fn remove_delay(&self) -> Duration {
        Duration::from_millis(self.remove_delay_ms)
    }

    /// Returns the display duration as a [`Duration`].
    #[must_use]
    pub const fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            limit: 1,
            remove_delay_ms: 1_000_000,
            display_ms: 5_000,
        }
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use pm_core::{ColorScheme, TuiConfig, ViewMode};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// assert_eq!(config.default_view, ViewMode::Grid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI tick interval in milliseconds.
    pub tick_rate_ms: u64,

    /// Render rate in frames per second.
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,

    /// Layout used when the TUI starts.
    pub default_view: ViewMode,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
            default_view: ViewMode::Grid,
        }
    }
}

/// Root configuration for prodman.
///
/// # Examples
///
/// ```
/// use pm_core::Config;
///
/// let config = Config::default();
/// assert!(config.validate().is_ok());
///
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("items_per_page"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog browsing configuration.
    pub catalog: CatalogConfig,

    /// Toast queue configuration.
    pub toast: ToastConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads a configuration from a JSON file and validates it.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, an I/O or
    /// parse error if it cannot be read, or [`ConfigError::InvalidOption`] if
    /// a value is out of range.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path, "Loaded configuration");
        Ok(config)
    }

    /// Checks that every option is within range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] naming the first bad option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.items_per_page == 0 {
            return Err(ConfigError::invalid_option(
                "catalog.items_per_page",
                "must be at least 1",
            ));
        }
        if self.toast.limit == 0 {
            return Err(ConfigError::invalid_option("toast.limit", "must be at least 1"));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid_option("tui.tick_rate_ms", "must be positive"));
        }
        if self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option("tui.frame_rate", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.items_per_page, 8);
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_toast_config_defaults() {
        let config = ToastConfig::default();
        assert_eq!(config.limit, 1);
        assert_eq!(config.remove_delay(), Duration::from_secs(1000));
        assert_eq!(config.display_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggle(), ViewMode::List);
        assert_eq!(ViewMode::List.toggle(), ViewMode::Grid);
        assert_eq!(ViewMode::List.label(), "List");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"catalog": {"items_per_page": 12}, "tui": {"default_view": "list"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.catalog.items_per_page, 12);
        assert_eq!(config.catalog.search_debounce_ms, 500);
        assert_eq!(config.tui.default_view, ViewMode::List);
        assert_eq!(config.toast, ToastConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.catalog.items_per_page = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("catalog.items_per_page"));
    }

    #[test]
    fn test_validate_rejects_zero_toast_limit() {
        let mut config = Config::default();
        config.toast.limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("prodman.json")).unwrap();
        std::fs::write(&path, r#"{"toast": {"limit": 3}}"#).unwrap();

        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.toast.limit, 3);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = Config::from_json_file(Utf8Path::new("/nonexistent/prodman.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Light).unwrap(),
            r#""light""#
        );
    }
}
