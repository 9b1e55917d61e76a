//! Dashboard configuration loaded from TOML.
//!
//! Every field has a default matching the stock dashboard markup, so an
//! empty document yields a working configuration.

use serde::Deserialize;

use crate::error::{LaunchpadError, Result};

/// Top-level dashboard configuration (`launchpad.toml`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Items shown before the "show more" control is needed.
    pub page_size: usize,
    /// Path the service worker script is registered from.
    pub worker_path: String,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Class marking the open sidebar and the visible no-results panel.
    pub active_class: String,
    /// Selector for items inside the apps container.
    pub item_selector: String,
    /// Selector for an item's name label.
    pub label_selector: String,
    /// Text shown when a search matches nothing.
    pub no_results_text: String,
    /// Notice shown when install is requested without an offer.
    pub install_unavailable_text: String,
    /// Element ids the dashboard binds to.
    pub elements: ElementIds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            worker_path: "/service-worker.js".to_string(),
            log_level: "info".to_string(),
            active_class: "active".to_string(),
            item_selector: ".icon".to_string(),
            label_selector: "p".to_string(),
            no_results_text: "No apps found.".to_string(),
            install_unavailable_text: "The app can't be installed right now.".to_string(),
            elements: ElementIds::default(),
        }
    }
}

/// Ids (and one selector) of the page elements the dashboard binds to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub search_input: String,
    pub search_button: String,
    pub search_results: String,
    pub refresh_button: String,
    pub sidebar: String,
    pub sidebar_toggle: String,
    pub sidebar_close: String,
    pub show_more: String,
    pub apps_container: String,
    /// Selector matching every install button (may match none).
    pub install_buttons: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_input: "searchInput".to_string(),
            search_button: "searchButton".to_string(),
            search_results: "searchResults".to_string(),
            refresh_button: "refreshButton".to_string(),
            sidebar: "sidebar".to_string(),
            sidebar_toggle: "sidebarToggle".to_string(),
            sidebar_close: "sidebarClose".to_string(),
            show_more: "showMoreMainApps".to_string(),
            apps_container: "mainApps".to_string(),
            install_buttons: "#installPWA, #settingsInstallPWA".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(LaunchpadError::Config("page_size must be at least 1".into()));
        }
        if self.worker_path.trim().is_empty() {
            return Err(LaunchpadError::Config("worker_path is empty".into()));
        }
        if self.item_selector.trim().is_empty() {
            return Err(LaunchpadError::Config("item_selector is empty".into()));
        }
        Ok(())
    }

    /// Configured log level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level {:?}, using info", self.log_level);
            log::LevelFilter::Info
        })
    }
}
