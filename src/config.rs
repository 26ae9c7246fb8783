//! Nav configuration
//!
//! The caller describes the nav declaratively: the ordered items, the current
//! route, an easing curve, and optional color tokens. The configuration
//! serializes to JSON so hosts can persist it alongside their own settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::Ease;
use crate::theme::NavPalette;

/// One navigation entry. Identity is `href`; it is both the render key and
/// the active-match key, so hrefs must be unique within a nav.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Visible pill label.
    pub label: String,
    /// Route identifier handed back on selection.
    pub href: String,
    /// Accessible name; falls back to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            aria_label: None,
        }
    }

    /// Accessible name for assistive tech.
    pub fn accessible_label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }
}

/// Recognized options for one nav instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillNavConfig {
    /// Ordered pill entries.
    pub items: Vec<NavItem>,
    /// Route currently displayed by the host.
    pub active_href: String,
    /// Easing curve shared by every hover track.
    #[serde(default)]
    pub ease: Ease,
    /// Active pill background and hover circle fill. Default `#fff`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    /// Resting pill background. Default `#060010`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pill_color: Option<String>,
    /// Label color over the active/hovered fill. Default `#060010`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovered_pill_text_color: Option<String>,
    /// Resting label color. Defaults to `base_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pill_text_color: Option<String>,
    /// Play the staggered entrance once on first load.
    #[serde(default = "default_true")]
    pub initial_load_animation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PillNavConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_href: "/".to_string(),
            ease: Ease::default(),
            base_color: None,
            pill_color: None,
            hovered_pill_text_color: None,
            pill_text_color: None,
            initial_load_animation: true,
        }
    }
}

impl PillNavConfig {
    pub fn new(items: Vec<NavItem>, active_href: impl Into<String>) -> Self {
        Self {
            items,
            active_href: active_href.into(),
            ..Self::default()
        }
    }

    /// Resolve the configured color tokens into a concrete palette.
    pub fn palette(&self) -> NavPalette {
        NavPalette::resolve(
            self.base_color.as_deref(),
            self.pill_color.as_deref(),
            self.hovered_pill_text_color.as_deref(),
            self.pill_text_color.as_deref(),
        )
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Errors that can occur loading or saving a nav configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
