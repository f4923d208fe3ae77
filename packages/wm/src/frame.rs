//! Window frame geometry: title bar, control buttons, and resize handles.
//!
//! The frame renderer proper lives in the host shell; this module computes
//! the hit regions it renders against and classifies pointer positions.
//! Control buttons are tested before anything else so a click on "close"
//! can never double as the start of a drag, and resize handles only exist
//! while the window is neither maximized nor snapped.

use crate::constants::frame::{CONTROL_BUTTON_WIDTH, CORNER_HIT_PX, HANDLE_HIT_PX};
use crate::interaction::ResizeEdge;
use crate::state::WindowFrame;

/// A title-bar control button, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    /// Minimize to the taskbar.
    Minimize,
    /// Maximize, or restore when already maximized/snapped.
    MaximizeRestore,
    /// Close the window.
    Close,
}

/// The frame region a pointer position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRegion {
    /// One of the control buttons; swallows the press.
    Control(ControlButton),
    /// A resize handle.
    ResizeHandle(ResizeEdge),
    /// The draggable title-bar surface.
    TitleBar,
    /// The application content area.
    Content,
    /// Outside the window frame entirely.
    Outside,
}

/// Returns the title-bar rectangle.
#[must_use]
pub const fn titlebar_rect(frame: WindowFrame, titlebar_height: u32) -> WindowFrame {
    WindowFrame::new(frame.x, frame.y, frame.width, titlebar_height)
}

/// Returns the control-button rectangles, right-aligned in the title bar.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn control_rects(
    frame: WindowFrame,
    titlebar_height: u32,
) -> [(ControlButton, WindowFrame); 3] {
    let right = frame.x + frame.width as i32;
    let button = |index: i32| -> WindowFrame {
        WindowFrame::new(
            right - index * CONTROL_BUTTON_WIDTH as i32,
            frame.y,
            CONTROL_BUTTON_WIDTH,
            titlebar_height,
        )
    };

    [
        (ControlButton::Minimize, button(3)),
        (ControlButton::MaximizeRestore, button(2)),
        (ControlButton::Close, button(1)),
    ]
}

/// Returns the eight resize-handle rectangles, corners first.
///
/// Corners are listed before edges so hit-testing in array order gives
/// diagonal handles priority where they overlap the edge bands.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn handle_rects(frame: WindowFrame) -> [(ResizeEdge, WindowFrame); 8] {
    let corner = CORNER_HIT_PX;
    let band = HANDLE_HIT_PX;
    let right = frame.x + frame.width as i32;
    let bottom = frame.y + frame.height as i32;
    let inner_width = frame.width.saturating_sub(2 * corner);
    let inner_height = frame.height.saturating_sub(2 * corner);

    [
        (
            ResizeEdge::Nw,
            WindowFrame::new(frame.x, frame.y, corner, corner),
        ),
        (
            ResizeEdge::Ne,
            WindowFrame::new(right - corner as i32, frame.y, corner, corner),
        ),
        (
            ResizeEdge::Sw,
            WindowFrame::new(frame.x, bottom - corner as i32, corner, corner),
        ),
        (
            ResizeEdge::Se,
            WindowFrame::new(right - corner as i32, bottom - corner as i32, corner, corner),
        ),
        (
            ResizeEdge::N,
            WindowFrame::new(frame.x + corner as i32, frame.y, inner_width, band),
        ),
        (
            ResizeEdge::S,
            WindowFrame::new(frame.x + corner as i32, bottom - band as i32, inner_width, band),
        ),
        (
            ResizeEdge::W,
            WindowFrame::new(frame.x, frame.y + corner as i32, band, inner_height),
        ),
        (
            ResizeEdge::E,
            WindowFrame::new(right - band as i32, frame.y + corner as i32, band, inner_height),
        ),
    ]
}

/// Classifies a pointer position against a window's frame.
///
/// Test order: outside, control buttons, resize handles (only when
/// `can_resize`), title bar, content.
#[must_use]
pub fn hit_test(
    frame: WindowFrame,
    can_resize: bool,
    titlebar_height: u32,
    x: i32,
    y: i32,
) -> FrameRegion {
    if !frame.contains(x, y) {
        return FrameRegion::Outside;
    }

    for (button, rect) in control_rects(frame, titlebar_height) {
        if rect.contains(x, y) {
            return FrameRegion::Control(button);
        }
    }

    if can_resize {
        for (edge, rect) in handle_rects(frame) {
            if rect.contains(x, y) {
                return FrameRegion::ResizeHandle(edge);
            }
        }
    }

    if titlebar_rect(frame, titlebar_height).contains(x, y) {
        return FrameRegion::TitleBar;
    }

    FrameRegion::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLEBAR: u32 = 32;

    fn frame() -> WindowFrame { WindowFrame::new(100, 100, 400, 300) }

    #[test]
    fn test_outside() {
        assert_eq!(hit_test(frame(), true, TITLEBAR, 99, 150), FrameRegion::Outside);
        assert_eq!(hit_test(frame(), true, TITLEBAR, 500, 150), FrameRegion::Outside);
    }

    #[test]
    fn test_control_buttons_right_aligned() {
        // Close is the rightmost button.
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 499, 110),
            FrameRegion::Control(ControlButton::Close)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 499 - 40, 110),
            FrameRegion::Control(ControlButton::MaximizeRestore)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 499 - 80, 110),
            FrameRegion::Control(ControlButton::Minimize)
        );
    }

    #[test]
    fn test_controls_win_over_resize_handles() {
        // The top-right corner handle overlaps the close button; the
        // control must win so clicking close never starts a resize.
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 495, 102),
            FrameRegion::Control(ControlButton::Close)
        );
    }

    #[test]
    fn test_titlebar_between_handles_and_controls() {
        assert_eq!(hit_test(frame(), true, TITLEBAR, 250, 115), FrameRegion::TitleBar);
    }

    #[test]
    fn test_content_below_titlebar() {
        assert_eq!(hit_test(frame(), true, TITLEBAR, 250, 250), FrameRegion::Content);
    }

    #[test]
    fn test_edge_and_corner_handles() {
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 102, 102),
            FrameRegion::ResizeHandle(ResizeEdge::Nw)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 102, 399),
            FrameRegion::ResizeHandle(ResizeEdge::Sw)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 250, 102),
            FrameRegion::ResizeHandle(ResizeEdge::N)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 250, 397),
            FrameRegion::ResizeHandle(ResizeEdge::S)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 102, 250),
            FrameRegion::ResizeHandle(ResizeEdge::W)
        );
        assert_eq!(
            hit_test(frame(), true, TITLEBAR, 497, 250),
            FrameRegion::ResizeHandle(ResizeEdge::E)
        );
    }

    #[test]
    fn test_no_handles_when_resize_disabled() {
        // Maximized/snapped windows render no handles; the same pixel
        // falls through to the title bar or content.
        assert_eq!(hit_test(frame(), false, TITLEBAR, 250, 102), FrameRegion::TitleBar);
        assert_eq!(hit_test(frame(), false, TITLEBAR, 102, 250), FrameRegion::Content);
    }

    #[test]
    fn test_handle_rects_cover_all_edges() {
        let rects = handle_rects(frame());
        assert_eq!(rects.len(), 8);
        for edge in ResizeEdge::ALL {
            assert!(rects.iter().any(|(e, _)| *e == edge), "missing {edge:?}");
        }
    }
}
