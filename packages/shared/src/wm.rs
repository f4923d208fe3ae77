//! Window-manager types shared between the manager crate and the shell host.
//!
//! These types cross the boundary to the rendering layer (taskbar, window
//! chrome, settings UI) and are therefore serializable with camelCase field
//! names matching the host's conventions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The edge a window is snapped to.
///
/// A snapped window occupies a fixed region of the work area: the left or
/// right half, or the full work area for `Top`. A window is never snapped
/// and maximized at the same time; top-snap is the drag-to-top-edge path to
/// a full-work-area window, tracked separately from an explicit maximize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SnapEdge {
    /// Left half of the work area.
    Left,
    /// Right half of the work area.
    Right,
    /// Full work area (reached by dragging to the top edge).
    Top,
}

/// Snapshot of a single window for the host renderer and taskbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowInfo {
    /// Unique window identifier.
    pub id: u64,

    /// Identifier of the application hosted by this window.
    pub app_id: String,

    /// Window title.
    pub title: String,

    /// X position in viewport pixels.
    pub x: i32,

    /// Y position in viewport pixels.
    pub y: i32,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Whether the window occupies the full work area.
    pub is_maximized: bool,

    /// Whether the window is hidden, leaving only its taskbar entry.
    pub is_minimized: bool,

    /// Whether this window is the active (topmost) one.
    pub is_focused: bool,

    /// The edge this window is snapped to, if any.
    pub snap_edge: Option<SnapEdge>,

    /// Stacking position; higher values render on top.
    pub z_index: i32,
}

/// Animation configuration.
///
/// Can be either a simple boolean to enable/disable all window animations
/// with default settings, or a full settings object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnimationConfig {
    /// Simple on/off switch using default settings.
    Enabled(bool),

    /// Full animation settings.
    Settings(AnimationSettings),
}

impl AnimationConfig {
    /// Returns whether animations are enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Settings(_) => true,
        }
    }

    /// Returns the effective animation settings.
    #[must_use]
    pub fn settings(&self) -> AnimationSettings {
        match self {
            Self::Enabled(_) => AnimationSettings::default(),
            Self::Settings(settings) => settings.clone(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self { Self::Enabled(true) }
}

/// Detailed animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationSettings {
    /// Animation duration in milliseconds.
    pub duration: u32,

    /// Easing function for transitions.
    pub easing: EasingFunction,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: 220,
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// Easing function for window animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EasingFunction {
    /// Constant speed.
    Linear,
    /// Slow start, accelerates.
    EaseIn,
    /// Fast start, decelerates.
    EaseOut,
    /// Slow start and end. This is the default.
    #[default]
    EaseInOut,
}
