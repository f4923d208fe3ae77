//! Pointer routing: drag, resize, and snap preview.
//!
//! Pointer-down classifies the press against the window frame and opens a
//! drag or resize session; pointer-move advances the session; pointer-up
//! commits a previewed snap and discards the session. Drags are two-phase
//! (preview in the band, commit on release), resizes commit on every move
//! from the start-of-interaction snapshot.

use fenster_shared::SnapEdge;

use crate::constants::interaction::RESTORE_DRAG_OFFSET_Y;
use crate::frame::{self, FrameRegion};
use crate::interaction::{self, DragSession, Interaction, ResizeEdge, ResizeSession};
use crate::snap;
use crate::state::{Point, WindowId};

use super::WindowManager;

impl WindowManager {
    /// Handles a pointer press over a window.
    ///
    /// Focuses the window, then routes by frame region: the title bar
    /// starts a drag, a resize handle starts a resize, and a control
    /// button swallows the press (its action fires on click, via
    /// [`WindowManager::control_clicked`]). Minimized and mid-minimize
    /// windows ignore presses.
    pub fn pointer_down(&mut self, id: WindowId, x: i32, y: i32) {
        let Some(record) = self.store.get(id) else { return };
        if record.is_minimized || self.animator.is_animating(id) {
            return;
        }

        let _ = self.store.focus(id);

        let Some(record) = self.store.get(id) else { return };
        let layout = record.layout_frame(&self.desktop);
        let region = frame::hit_test(
            layout,
            record.can_resize(),
            self.config.window.titlebar_height,
            x,
            y,
        );

        match region {
            FrameRegion::TitleBar => self.start_drag(id, x, y),
            FrameRegion::ResizeHandle(edge) => self.start_resize(id, edge, x, y),
            FrameRegion::Control(_) | FrameRegion::Content | FrameRegion::Outside => {}
        }
    }

    /// Starts a title-bar drag.
    ///
    /// A maximized or snapped window is restored first, then re-anchored
    /// under the cursor: the drag offset becomes half the application's
    /// default width horizontally and a fixed title-bar offset
    /// vertically, so the restored window hangs naturally from the
    /// pointer instead of jumping to its old position.
    fn start_drag(&mut self, id: WindowId, x: i32, y: i32) {
        let Some(record) = self.store.get(id) else { return };

        let offset = if record.can_resize() {
            Point::new(x - record.frame.x, y - record.frame.y)
        } else {
            #[allow(clippy::cast_possible_wrap)]
            let half_width = self.registry.spec_for(&record.app_id).default_width as i32 / 2;
            let offset = Point::new(half_width, RESTORE_DRAG_OFFSET_Y);

            let _ = self.store.restore(id);
            let _ = self.store.set_position(id, x - offset.x, y - offset.y);
            offset
        };

        self.interaction = Some((id, Interaction::Dragging(DragSession {
            offset,
            preview_snap: None,
        })));
    }

    /// Starts a resize from a handle.
    ///
    /// Unreachable for maximized and snapped windows, which expose no
    /// handles; no transient state is created for them.
    fn start_resize(&mut self, id: WindowId, edge: ResizeEdge, x: i32, y: i32) {
        let Some(record) = self.store.get(id) else { return };
        if !record.can_resize() {
            return;
        }

        self.interaction = Some((id, Interaction::Resizing(ResizeSession {
            edge,
            start_pointer: Point::new(x, y),
            start_frame: record.frame,
        })));
    }

    /// Advances the in-flight interaction to a new pointer position.
    ///
    /// No-op when nothing is in flight.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        match self.interaction {
            Some((id, Interaction::Dragging(session))) => self.drag_move(id, session, x, y),
            Some((id, Interaction::Resizing(session))) => self.resize_move(id, session, x, y),
            None => {}
        }
    }

    fn drag_move(&mut self, id: WindowId, mut session: DragSession, x: i32, y: i32) {
        // Band membership is tested against the raw pointer, not the
        // window origin, so the preview engages exactly when the cursor
        // crosses the band.
        session.preview_snap = snap::target_for_cursor(x, y, &self.desktop, &self.config.snap);

        if session.preview_snap.is_none() {
            let position = self.clamp_drag_position(x - session.offset.x, y - session.offset.y);
            let _ = self.store.set_position(id, position.x, position.y);
        }

        self.interaction = Some((id, Interaction::Dragging(session)));
    }

    fn resize_move(&mut self, id: WindowId, session: ResizeSession, x: i32, y: i32) {
        let Some(record) = self.store.get(id) else { return };

        let frame = interaction::resized_frame(
            session.start_frame,
            session.edge,
            x - session.start_pointer.x,
            y - session.start_pointer.y,
            record.min_width,
            record.min_height,
        );

        let _ = self.store.set_position(id, frame.x, frame.y);
        let _ = self.store.set_size(id, frame.width, frame.height);
    }

    /// Handles the pointer release that ends an interaction.
    ///
    /// A drag with a previewed snap commits it here; everything else was
    /// already committed move-by-move. The transient session is discarded
    /// unconditionally.
    pub fn pointer_up(&mut self, x: i32, y: i32) {
        if let Some((id, Interaction::Dragging(session))) = self.interaction {
            if let Some(edge) = session.preview_snap {
                let _ = self.store.snap(id, edge, &self.desktop);
            } else {
                self.drag_move(id, session, x, y);
            }
        }

        self.interaction = None;
    }

    /// Clamps a drag position so the title bar stays reachable: it can
    /// never leave the top of the viewport nor sink fully under the
    /// taskbar.
    #[allow(clippy::cast_possible_wrap)]
    fn clamp_drag_position(&self, x: i32, y: i32) -> Point {
        let work = self.desktop.work_area();
        let max_y = (work.height.saturating_sub(self.config.window.titlebar_height)) as i32;
        Point::new(x, y.clamp(0, max_y))
    }

    /// The CSS cursor the host should show at a pointer position, if a
    /// resize handle is under it.
    #[must_use]
    pub fn resize_cursor_at(&self, id: WindowId, x: i32, y: i32) -> Option<&'static str> {
        let record = self.store.get(id)?;
        if !record.can_resize() {
            return None;
        }

        let layout = record.layout_frame(&self.desktop);
        match frame::hit_test(layout, true, self.config.window.titlebar_height, x, y) {
            FrameRegion::ResizeHandle(edge) => Some(edge.cursor()),
            _ => None,
        }
    }

    /// The snap edge the whole desktop would preview for a cursor
    /// position.
    #[must_use]
    pub fn snap_target_at(&self, x: i32, y: i32) -> Option<SnapEdge> {
        snap::target_for_cursor(x, y, &self.desktop, &self.config.snap)
    }
}
