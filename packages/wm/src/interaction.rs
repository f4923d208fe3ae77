//! Transient pointer interaction state.
//!
//! Tracks in-flight drag and resize operations. This state is created at
//! pointer-down, mutated on every pointer-move, and fully discarded at
//! pointer-up; it is never persisted alongside the window records.
//!
//! Drags are two-phase: while the cursor sits in a snap band the window
//! geometry is left untouched and only the preview target updates, with a
//! single committing snap on release. Resizes are single-phase and commit
//! on every move, recomputing from a start-of-interaction snapshot so no
//! floating error accumulates across moves.

use fenster_shared::SnapEdge;

use crate::state::{Point, WindowFrame};

/// The edge or corner a resize was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top edge.
    N,
    /// Bottom edge.
    S,
    /// Right edge.
    E,
    /// Left edge.
    W,
    /// Top-right corner.
    Ne,
    /// Top-left corner.
    Nw,
    /// Bottom-right corner.
    Se,
    /// Bottom-left corner.
    Sw,
}

impl ResizeEdge {
    /// All eight handles, edges first.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::Ne,
        Self::Nw,
        Self::Se,
        Self::Sw,
    ];

    /// Returns whether this handle moves the left edge.
    #[must_use]
    pub const fn affects_left(self) -> bool { matches!(self, Self::W | Self::Nw | Self::Sw) }

    /// Returns whether this handle moves the right edge.
    #[must_use]
    pub const fn affects_right(self) -> bool { matches!(self, Self::E | Self::Ne | Self::Se) }

    /// Returns whether this handle moves the top edge.
    #[must_use]
    pub const fn affects_top(self) -> bool { matches!(self, Self::N | Self::Ne | Self::Nw) }

    /// Returns whether this handle moves the bottom edge.
    #[must_use]
    pub const fn affects_bottom(self) -> bool { matches!(self, Self::S | Self::Se | Self::Sw) }

    /// The CSS cursor name for this handle, for the host renderer.
    #[must_use]
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::S => "s-resize",
            Self::E => "e-resize",
            Self::W => "w-resize",
            Self::Ne => "ne-resize",
            Self::Nw => "nw-resize",
            Self::Se => "se-resize",
            Self::Sw => "sw-resize",
        }
    }
}

/// State of an in-flight title-bar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pixel offset between the pointer-down position and the window's
    /// top-left corner, fixed for the duration of the drag.
    pub offset: Point,

    /// The snap target currently previewed, or `None` when the window is
    /// following the cursor directly.
    pub preview_snap: Option<SnapEdge>,
}

/// State of an in-flight resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    /// The handle the resize was started from.
    pub edge: ResizeEdge,

    /// Pointer position at resize start.
    pub start_pointer: Point,

    /// Window frame at resize start; deltas are applied against this
    /// snapshot, never against intermediate frames.
    pub start_frame: WindowFrame,
}

/// An in-flight pointer interaction. Drag and resize are mutually
/// exclusive per window, and at most one window interacts at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The window is being dragged by its title bar.
    Dragging(DragSession),

    /// The window is being resized from one of its handles.
    Resizing(ResizeSession),
}

impl Interaction {
    /// Returns whether this is a drag.
    #[must_use]
    pub const fn is_drag(&self) -> bool { matches!(self, Self::Dragging(_)) }

    /// Returns whether this is a resize.
    #[must_use]
    pub const fn is_resize(&self) -> bool { matches!(self, Self::Resizing(_)) }
}

/// Computes the frame a resize-in-progress produces.
///
/// `dx`/`dy` are the pointer deltas since resize start. Width and height are
/// clamped to the minimums before any position is derived, so a `w`/`n`
/// resize holds the opposite edge fixed and never pops the window past its
/// minimum size.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn resized_frame(
    start: WindowFrame,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_width: u32,
    min_height: u32,
) -> WindowFrame {
    let mut frame = start;

    if edge.affects_right() {
        frame.width = (start.width as i32 + dx).max(min_width as i32) as u32;
    } else if edge.affects_left() {
        let new_width = (start.width as i32 - dx).max(min_width as i32) as u32;
        frame.x = start.x + (start.width as i32 - new_width as i32);
        frame.width = new_width;
    }

    if edge.affects_bottom() {
        frame.height = (start.height as i32 + dy).max(min_height as i32) as u32;
    } else if edge.affects_top() {
        let new_height = (start.height as i32 - dy).max(min_height as i32) as u32;
        frame.y = start.y + (start.height as i32 - new_height as i32);
        frame.height = new_height;
    }

    frame
}
