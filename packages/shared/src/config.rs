//! Configuration types for the Fenster desktop shell.
//!
//! This module provides the configuration types and loading functionality
//! used by the window manager and the shell host.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wm::AnimationConfig;

/// Snap band thresholds, measured in pixels from the viewport edges.
///
/// A drag whose raw cursor position enters one of these bands previews a
/// snap target instead of committing window movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    /// Width of the left and right snap bands.
    pub edge_threshold: u32,

    /// Height of the top snap band (drag-to-maximize).
    pub top_threshold: u32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            edge_threshold: 12,
            top_threshold: 8,
        }
    }
}

/// Default window dimensions and frame metrics.
///
/// Per-application values registered at runtime take precedence; these are
/// the fallbacks for applications without a registered spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    /// Default width for new windows.
    pub default_width: u32,

    /// Default height for new windows.
    pub default_height: u32,

    /// Minimum window width; resize deltas are clamped to this floor.
    pub min_width: u32,

    /// Minimum window height; resize deltas are clamped to this floor.
    pub min_height: u32,

    /// Height of the title bar, also the minimum visible strip kept on
    /// screen when a window is dragged toward the bottom of the work area.
    pub titlebar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_width: 720,
            default_height: 480,
            min_width: 320,
            min_height: 200,
            titlebar_height: 32,
        }
    }
}

/// The complete Fenster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FensterConfig {
    /// Snap band thresholds.
    pub snap: SnapConfig,

    /// Window animation configuration.
    pub animations: AnimationConfig,

    /// Default window dimensions and frame metrics.
    pub window: WindowConfig,
}

impl FensterConfig {
    /// Validates the configuration and returns any warnings.
    ///
    /// Validation never fails; suspicious values are reported and the
    /// configuration is used as-is.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.window.min_width > self.window.default_width {
            warnings.push(format!(
                "window.minWidth ({}) exceeds window.defaultWidth ({})",
                self.window.min_width, self.window.default_width
            ));
        }

        if self.window.min_height > self.window.default_height {
            warnings.push(format!(
                "window.minHeight ({}) exceeds window.defaultHeight ({})",
                self.window.min_height, self.window.default_height
            ));
        }

        if self.snap.edge_threshold == 0 {
            warnings.push("snap.edgeThreshold is 0; edge snapping is unreachable".to_string());
        }

        if self.snap.top_threshold == 0 {
            warnings.push("snap.topThreshold is 0; drag-to-maximize is unreachable".to_string());
        }

        if self.window.titlebar_height == 0 {
            warnings.push("window.titlebarHeight is 0; windows cannot be dragged".to_string());
        }

        warnings
    }

    /// Validates the configuration, logging any warnings to stderr.
    ///
    /// Returns the number of warnings emitted.
    pub fn validate_and_log(&self) -> usize {
        let warnings = self.validate();
        for warning in &warnings {
            eprintln!("fenster: config warning: {warning}");
        }
        warnings.len()
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at $XDG_CONFIG_HOME/fenster/config.json or ~/.fenster.json"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations:
/// 1. `$XDG_CONFIG_HOME/fenster/config.json` (if `XDG_CONFIG_HOME` is set)
/// 2. The platform configuration directory, e.g. `~/.config/fenster/config.json`
/// 3. `~/.fenster.json` (legacy/simple location)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Check XDG_CONFIG_HOME first if explicitly set
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg_config).join("fenster").join("config.json"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("fenster").join("config.json");
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    // $HOME/.fenster.json (legacy/simple location)
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".fenster.json"));
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// The configuration file supports JSONC format (JSON with comments).
/// Both single-line (`//`) and multi-line (`/* */`) comments are stripped
/// before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, `ConfigError::IoError` if a configuration file
/// exists but could not be read, and `ConfigError::ParseError` if the file
/// contains invalid JSON.
pub fn load_config() -> Result<(FensterConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let file = fs::File::open(&path)?;
            // Strip comments from JSONC before parsing
            let reader = json_comments::StripComments::new(file);
            let config: FensterConfig = serde_json::from_reader(reader)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_warnings() {
        let config = FensterConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_flags_min_above_default() {
        let mut config = FensterConfig::default();
        config.window.min_width = config.window.default_width + 1;

        let warnings = config.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("minWidth"));
    }

    #[test]
    fn test_validate_flags_zero_thresholds() {
        let mut config = FensterConfig::default();
        config.snap.edge_threshold = 0;
        config.snap.top_threshold = 0;

        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let json = r#"{ "snap": { "edgeThreshold": 20 } }"#;
        let config: FensterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.snap.edge_threshold, 20);
        assert_eq!(config.snap.top_threshold, SnapConfig::default().top_threshold);
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.animations.is_enabled());
    }

    #[test]
    fn test_parse_jsonc_with_comments() {
        let jsonc = r#"{
            // disable all window animations
            "animations": false
        }"#;
        let reader = json_comments::StripComments::new(jsonc.as_bytes());
        let config: FensterConfig = serde_json::from_reader(reader).unwrap();

        assert!(!config.animations.is_enabled());
    }

    #[test]
    fn test_config_paths_non_empty() {
        // At least the legacy home location should resolve in any environment
        // that has a home directory.
        if dirs::home_dir().is_some() {
            assert!(!config_paths().is_empty());
        }
    }
}
