//! Core geometry and window state types.
//!
//! The types in this module are plain data: the authoritative window records
//! live in the [`crate::store::WindowStore`] and are mutated only through its
//! documented mutators. Transient drag/resize scratch state is deliberately a
//! separate structure (see [`crate::interaction`]) so interaction artifacts
//! never leak into persisted records.

use fenster_shared::{SnapEdge, WindowInfo};

/// Unique identifier for a window, valid for the lifetime of the window
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// Creates a window id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self { Self(raw) }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 { self.0 }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// X coordinate.
    pub x: i32,

    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

/// Window frame (position and size) in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFrame {
    /// X position (from left edge of the viewport).
    pub x: i32,

    /// Y position (from top edge of the viewport).
    pub y: i32,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl WindowFrame {
    /// Creates a new window frame.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the frame's center point.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width as i32 / 2, self.y + self.height as i32 / 2)
    }

    /// Returns whether the point lies inside the frame.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x + self.width as i32
            && y >= self.y
            && y < self.y + self.height as i32
    }
}

/// The desktop viewport and its taskbar strip.
///
/// The work area is the viewport region excluding the taskbar; maximized and
/// snapped windows are laid out against the work area, while the minimize
/// animation targets points in the full viewport (taskbar icons included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Desktop {
    /// Viewport width in pixels.
    pub width: u32,

    /// Viewport height in pixels.
    pub height: u32,

    /// Height of the taskbar along the bottom edge.
    pub taskbar_height: u32,
}

impl Desktop {
    /// Creates a new desktop description.
    #[must_use]
    pub const fn new(width: u32, height: u32, taskbar_height: u32) -> Self {
        Self { width, height, taskbar_height }
    }

    /// Returns the work area: the viewport minus the taskbar.
    #[must_use]
    pub const fn work_area(&self) -> WindowFrame {
        WindowFrame::new(0, 0, self.width, self.height.saturating_sub(self.taskbar_height))
    }
}

/// A window tracked by the geometry store.
///
/// `frame` is always the committed on-screen geometry except while
/// maximized, when layout uses the full work area instead and `frame` is
/// whatever the window last committed. `restore_frame` holds the geometry to
/// return to when leaving the maximized or snapped state; it is captured
/// once on entering either state, so a maximize followed by a snap still
/// restores to the original floating geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowRecord {
    /// Unique window identifier.
    pub id: WindowId,

    /// Identifier of the application hosted by this window.
    pub app_id: String,

    /// Window title.
    pub title: String,

    /// Committed window geometry.
    pub frame: WindowFrame,

    /// Minimum width, set at creation from the application's declared
    /// minimums.
    pub min_width: u32,

    /// Minimum height, set at creation from the application's declared
    /// minimums.
    pub min_height: u32,

    /// Whether the window occupies the full work area.
    /// Mutually exclusive with `snap_edge`.
    pub is_maximized: bool,

    /// Whether the window is hidden, leaving only its taskbar entry.
    pub is_minimized: bool,

    /// The edge this window is snapped to, if any.
    /// Mutually exclusive with `is_maximized`.
    pub snap_edge: Option<SnapEdge>,

    /// Geometry to restore when leaving the maximized or snapped state.
    pub restore_frame: Option<WindowFrame>,

    /// Stacking position; the active window holds the maximum.
    pub z_index: i32,
}

impl WindowRecord {
    /// Returns the frame the window is laid out with.
    ///
    /// Maximized windows occupy the full work area regardless of their
    /// committed geometry; snapped windows have their snap rectangle
    /// committed as `frame` by the store.
    #[must_use]
    pub const fn layout_frame(&self, desktop: &Desktop) -> WindowFrame {
        if self.is_maximized { desktop.work_area() } else { self.frame }
    }

    /// Returns whether the window currently exposes resize handles.
    ///
    /// Maximized and snapped windows cannot be resized.
    #[must_use]
    pub const fn can_resize(&self) -> bool { !self.is_maximized && self.snap_edge.is_none() }

    /// Converts to the shared `WindowInfo` type for the host renderer.
    #[must_use]
    pub fn to_info(&self, is_focused: bool, desktop: &Desktop) -> WindowInfo {
        let frame = self.layout_frame(desktop);
        WindowInfo {
            id: self.id.raw(),
            app_id: self.app_id.clone(),
            title: self.title.clone(),
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            is_maximized: self.is_maximized,
            is_minimized: self.is_minimized,
            is_focused,
            snap_edge: self.snap_edge,
            z_index: self.z_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(frame: WindowFrame) -> WindowRecord {
        WindowRecord {
            id: WindowId::new(1),
            app_id: "browser".to_string(),
            title: "Browser".to_string(),
            frame,
            min_width: 320,
            min_height: 200,
            is_maximized: false,
            is_minimized: false,
            snap_edge: None,
            restore_frame: None,
            z_index: 1,
        }
    }

    #[test]
    fn test_frame_center() {
        let frame = WindowFrame::new(100, 50, 200, 100);
        assert_eq!(frame.center(), Point::new(200, 100));
    }

    #[test]
    fn test_frame_contains_is_half_open() {
        let frame = WindowFrame::new(10, 10, 20, 20);
        assert!(frame.contains(10, 10));
        assert!(frame.contains(29, 29));
        assert!(!frame.contains(30, 10));
        assert!(!frame.contains(10, 30));
        assert!(!frame.contains(9, 15));
    }

    #[test]
    fn test_work_area_excludes_taskbar() {
        let desktop = Desktop::new(1920, 1080, 48);
        assert_eq!(desktop.work_area(), WindowFrame::new(0, 0, 1920, 1032));
    }

    #[test]
    fn test_work_area_saturates_on_degenerate_taskbar() {
        let desktop = Desktop::new(800, 40, 48);
        assert_eq!(desktop.work_area().height, 0);
    }

    #[test]
    fn test_layout_frame_maximized_uses_work_area() {
        let desktop = Desktop::new(1280, 800, 48);
        let mut win = record(WindowFrame::new(40, 40, 640, 480));

        assert_eq!(win.layout_frame(&desktop), win.frame);

        win.is_maximized = true;
        assert_eq!(win.layout_frame(&desktop), desktop.work_area());
    }

    #[test]
    fn test_can_resize_excludes_maximized_and_snapped() {
        let mut win = record(WindowFrame::new(0, 0, 640, 480));
        assert!(win.can_resize());

        win.is_maximized = true;
        assert!(!win.can_resize());

        win.is_maximized = false;
        win.snap_edge = Some(SnapEdge::Left);
        assert!(!win.can_resize());
    }

    #[test]
    fn test_to_info_reports_layout_frame() {
        let desktop = Desktop::new(1280, 800, 48);
        let mut win = record(WindowFrame::new(40, 40, 640, 480));
        win.is_maximized = true;

        let info = win.to_info(true, &desktop);
        assert_eq!((info.x, info.y), (0, 0));
        assert_eq!((info.width, info.height), (1280, 752));
        assert!(info.is_focused);
        assert_eq!(info.app_id, "browser");
    }
}
