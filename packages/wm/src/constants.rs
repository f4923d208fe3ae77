//! Internal constants for window manager tuning.
//!
//! This module centralizes the magic numbers used throughout the window
//! manager. Values are grouped by functionality:
//!
//! - `interaction` - Drag and resize behavior
//! - `frame` - Window chrome hit-region sizes
//! - `placement` - New-window placement
//! - `animation` - Minimize animation parameters

/// Drag and resize tuning.
pub mod interaction {
    /// Vertical pointer offset applied when a maximized window is dragged
    /// out of its maximized state (pixels).
    ///
    /// The restored window is re-anchored under the cursor, horizontally
    /// centered on the application's default width; this offset keeps the
    /// cursor inside the title bar.
    pub const RESTORE_DRAG_OFFSET_Y: i32 = 16;
}

/// Window chrome hit-region sizes.
pub mod frame {
    /// Thickness of the invisible edge resize handles (pixels).
    pub const HANDLE_HIT_PX: u32 = 6;

    /// Side length of the square corner resize handles (pixels).
    ///
    /// Corners are larger than edges so diagonal resizing stays easy to
    /// target.
    pub const CORNER_HIT_PX: u32 = 12;

    /// Width of each title-bar control button (pixels).
    pub const CONTROL_BUTTON_WIDTH: u32 = 40;
}

/// New-window placement.
pub mod placement {
    /// Top-left origin of the placement cascade (pixels).
    pub const CASCADE_ORIGIN_X: i32 = 64;

    /// Top offset of the placement cascade (pixels).
    pub const CASCADE_ORIGIN_Y: i32 = 48;

    /// Diagonal step between successive new windows (pixels).
    pub const CASCADE_STEP_PX: i32 = 28;

    /// Number of cascade steps before wrapping back to the origin.
    pub const CASCADE_WRAP: u64 = 10;
}

/// Minimize animation parameters.
pub mod animation {
    /// Distance of the fallback minimize target above the bottom viewport
    /// edge (pixels), used when no taskbar anchor is registered.
    pub const FALLBACK_BOTTOM_OFFSET: u32 = 24;
}
