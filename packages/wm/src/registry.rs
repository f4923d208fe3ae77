//! Application registry.
//!
//! Per-application window specifications: default and minimum dimensions
//! plus the taskbar icon path. New windows are sized from their
//! application's spec, and restoring a maximized window under the cursor
//! re-anchors the drag against the application's default width.
//!
//! Lookups never fail: an unregistered application resolves to a fallback
//! spec built from the window configuration defaults.

use std::collections::HashMap;

use fenster_shared::WindowConfig;

/// Window specification declared by an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    /// Display name of the application.
    pub name: String,

    /// Default width for new windows.
    pub default_width: u32,

    /// Default height for new windows.
    pub default_height: u32,

    /// Minimum window width.
    pub min_width: u32,

    /// Minimum window height.
    pub min_height: u32,

    /// Path to the application icon, for the title bar and taskbar.
    pub icon: String,
}

/// Registry of application window specs with a config-derived fallback.
#[derive(Debug, Clone)]
pub struct AppRegistry {
    apps: HashMap<String, AppSpec>,
    fallback: AppSpec,
}

impl AppRegistry {
    /// Creates a registry whose fallback spec comes from the window
    /// configuration defaults.
    #[must_use]
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            apps: HashMap::new(),
            fallback: AppSpec {
                name: String::new(),
                default_width: config.default_width,
                default_height: config.default_height,
                min_width: config.min_width,
                min_height: config.min_height,
                icon: String::new(),
            },
        }
    }

    /// Registers (or replaces) an application spec.
    pub fn register(&mut self, app_id: &str, spec: AppSpec) {
        self.apps.insert(app_id.to_string(), spec);
    }

    /// Returns whether an application has a registered spec.
    #[must_use]
    pub fn contains(&self, app_id: &str) -> bool { self.apps.contains_key(app_id) }

    /// Resolves the spec for an application, falling back to the
    /// configuration defaults for unregistered ids.
    #[must_use]
    pub fn spec_for(&self, app_id: &str) -> &AppSpec {
        self.apps.get(app_id).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AppRegistry { AppRegistry::new(&WindowConfig::default()) }

    #[test]
    fn test_unregistered_app_uses_fallback() {
        let registry = registry();
        let config = WindowConfig::default();

        let spec = registry.spec_for("unknown");
        assert_eq!(spec.default_width, config.default_width);
        assert_eq!(spec.min_height, config.min_height);
    }

    #[test]
    fn test_registered_spec_wins() {
        let mut registry = registry();
        registry.register("notepad", AppSpec {
            name: "Notepad".to_string(),
            default_width: 520,
            default_height: 400,
            min_width: 280,
            min_height: 180,
            icon: "/icons/notepad.svg".to_string(),
        });

        assert!(registry.contains("notepad"));
        let spec = registry.spec_for("notepad");
        assert_eq!(spec.default_width, 520);
        assert_eq!(spec.icon, "/icons/notepad.svg");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = registry();
        let base = AppSpec {
            name: "Files".to_string(),
            default_width: 600,
            default_height: 440,
            min_width: 320,
            min_height: 240,
            icon: String::new(),
        };
        registry.register("files", base.clone());
        registry.register("files", AppSpec { default_width: 640, ..base });

        assert_eq!(registry.spec_for("files").default_width, 640);
    }
}
