//! Application configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::nav::scroll::ScrollWindow;

/// Top-level application configuration.
///
/// Every field has a default so dirhop works without a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// The pane scroll window described by `[scroll]`.
    pub fn scroll_window(&self) -> ScrollWindow {
        ScrollWindow::new(self.scroll.window_height, self.scroll.trigger_margin)
    }
}

/// Listing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub show_hidden: bool,
    /// Start with the contents pane peeking into the selected folder.
    #[serde(default)]
    pub show_subfolders: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: true,
            show_subfolders: false,
        }
    }
}

/// Pane viewport sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_window_height")]
    pub window_height: usize,
    #[serde(default = "default_trigger_margin")]
    pub trigger_margin: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            window_height: default_window_height(),
            trigger_margin: default_trigger_margin(),
        }
    }
}

/// File preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            viewport_height: default_viewport_height(),
            max_lines: default_max_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_window_height() -> usize {
    16
}

fn default_trigger_margin() -> usize {
    3
}

fn default_viewport_height() -> usize {
    20
}

fn default_max_lines() -> usize {
    10_000
}
