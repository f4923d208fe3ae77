//! The window manager facade.
//!
//! Owns the geometry store, the application registry, the minimize
//! animator, and the transient pointer interaction, and exposes the
//! operations the host shell calls: open/close/focus, minimize with its
//! deferred commit, maximize toggling, and the per-frame tick.
//!
//! Pointer routing (drag, resize, snap preview) lives in the
//! `pointer_ops` sibling module; everything here is click- and
//! lifecycle-level.

mod pointer_ops;

use std::sync::Arc;
use std::time::Instant;

use fenster_shared::{FensterConfig, SnapEdge, WindowInfo};

use crate::animation::{AnchorRegistry, MinimizeAnimator, MinimizeTransform};
use crate::constants::placement::{
    CASCADE_ORIGIN_X, CASCADE_ORIGIN_Y, CASCADE_STEP_PX, CASCADE_WRAP,
};
use crate::error::{WmError, WmResult};
use crate::events::{InputEvent, InputQueue};
use crate::frame::ControlButton;
use crate::interaction::Interaction;
use crate::registry::{AppRegistry, AppSpec};
use crate::snap;
use crate::state::{Desktop, Point, WindowFrame, WindowId};
use crate::store::WindowStore;

/// The window manager. One instance per desktop session.
#[derive(Debug)]
pub struct WindowManager {
    config: FensterConfig,
    desktop: Desktop,
    store: WindowStore,
    registry: AppRegistry,
    anchors: AnchorRegistry,
    animator: MinimizeAnimator,
    input: Arc<InputQueue>,

    /// The in-flight pointer interaction, if any. At most one window
    /// interacts at a time.
    interaction: Option<(WindowId, Interaction)>,

    /// Windows opened so far, for cascade placement.
    opened: u64,
}

impl WindowManager {
    /// Creates a window manager for the given desktop.
    ///
    /// Configuration warnings are logged; suspicious values are used
    /// as-is.
    #[must_use]
    pub fn new(config: FensterConfig, desktop: Desktop) -> Self {
        config.validate_and_log();
        let registry = AppRegistry::new(&config.window);

        Self {
            config,
            desktop,
            store: WindowStore::new(),
            registry,
            anchors: AnchorRegistry::new(),
            animator: MinimizeAnimator::new(),
            input: Arc::new(InputQueue::new()),
            interaction: None,
            opened: 0,
        }
    }

    /// The desktop this manager lays windows out on.
    #[must_use]
    pub const fn desktop(&self) -> Desktop { self.desktop }

    /// Updates the desktop dimensions, e.g. on a viewport resize.
    pub const fn set_desktop(&mut self, desktop: Desktop) { self.desktop = desktop; }

    /// The shared input queue the host pushes pointer events onto.
    #[must_use]
    pub fn input_queue(&self) -> Arc<InputQueue> { Arc::clone(&self.input) }

    /// Registers an application's window spec.
    pub fn register_app(&mut self, app_id: &str, spec: AppSpec) {
        self.registry.register(app_id, spec);
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Opens a window for an application, placed on the cascade, sized
    /// from the application's spec, and focused.
    pub fn open_window(&mut self, app_id: &str, title: &str) -> WindowId {
        let spec = self.registry.spec_for(app_id);
        let (width, height) = (spec.default_width, spec.default_height);
        let (min_width, min_height) = (spec.min_width, spec.min_height);

        let slot = self.opened % CASCADE_WRAP;
        self.opened += 1;
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let frame = WindowFrame::new(
            CASCADE_ORIGIN_X + slot as i32 * CASCADE_STEP_PX,
            CASCADE_ORIGIN_Y + slot as i32 * CASCADE_STEP_PX,
            width,
            height,
        );

        self.store.open(app_id, title, frame, min_width, min_height)
    }

    /// Closes a window.
    ///
    /// Cancels any in-flight minimize animation and pointer interaction
    /// for it, so neither can act on the stale id afterwards.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn close_window(&mut self, id: WindowId) -> WmResult<()> {
        self.animator.cancel(id);
        self.anchors.clear(id);
        if self.interaction.is_some_and(|(active, _)| active == id) {
            self.interaction = None;
        }
        self.store.close(id)
    }

    /// Focuses a window, raising it to the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn focus_window(&mut self, id: WindowId) -> WmResult<()> { self.store.focus(id) }

    // ========================================================================
    // Minimize
    // ========================================================================

    /// Minimizes a window.
    ///
    /// With animations enabled, starts the fly-to-taskbar animation and
    /// defers the store commit until it completes; the window keeps
    /// rendering (with the animation transform) in the meantime. With
    /// animations disabled, commits immediately.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn minimize_window(&mut self, id: WindowId) -> WmResult<()> {
        self.minimize_window_at(id, Instant::now())
    }

    /// [`Self::minimize_window`] with an explicit clock, for tests.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn minimize_window_at(&mut self, id: WindowId, now: Instant) -> WmResult<()> {
        let record = self.store.get(id).ok_or(WmError::WindowNotFound(id))?;

        if !self.config.animations.is_enabled() {
            return self.store.minimize(id);
        }

        let start_center = record.layout_frame(&self.desktop).center();
        let target = self.anchors.target_for(id, &self.desktop);
        self.animator.start(id, start_center, target, &self.config.animations.settings(), now);
        Ok(())
    }

    /// Brings a minimized window back and focuses it.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn unminimize_window(&mut self, id: WindowId) -> WmResult<()> {
        self.store.unminimize(id)?;
        self.store.focus(id)
    }

    /// Whether a window's minimize animation is still in flight.
    #[must_use]
    pub fn is_minimizing(&self, id: WindowId) -> bool { self.animator.is_animating(id) }

    /// Samples the minimize transform for a window, if one is in flight.
    #[must_use]
    pub fn minimize_transform(&self, id: WindowId) -> Option<MinimizeTransform> {
        self.minimize_transform_at(id, Instant::now())
    }

    /// [`Self::minimize_transform`] with an explicit clock, for tests.
    #[must_use]
    pub fn minimize_transform_at(&self, id: WindowId, now: Instant) -> Option<MinimizeTransform> {
        self.animator.transform(id, now)
    }

    /// Records the taskbar anchor point for a window's minimize target.
    pub fn set_taskbar_anchor(&mut self, id: WindowId, center: Point) {
        self.anchors.set(id, center);
    }

    /// Clears a window's taskbar anchor; minimizes fall back to the
    /// bottom-center point.
    pub fn clear_taskbar_anchor(&mut self, id: WindowId) { self.anchors.clear(id); }

    // ========================================================================
    // Maximize
    // ========================================================================

    /// Toggles between maximized and restored.
    ///
    /// A snapped window counts as "not floating" too: toggling it
    /// restores its pre-snap geometry rather than maximizing on top of
    /// the snap.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn toggle_maximize(&mut self, id: WindowId) -> WmResult<()> {
        let record = self.store.get(id).ok_or(WmError::WindowNotFound(id))?;
        if record.can_resize() {
            self.store.maximize(id)
        } else {
            self.store.restore(id)
        }
    }

    // ========================================================================
    // Per-frame Tick
    // ========================================================================

    /// Per-frame tick: drains the input queue and commits completed
    /// minimize animations.
    pub fn tick(&mut self) { self.tick_at(Instant::now()); }

    /// [`Self::tick`] with an explicit clock, for tests.
    pub fn tick_at(&mut self, now: Instant) {
        for event in self.input_queue().take_all() {
            self.dispatch(event);
        }

        for id in self.animator.drain_completed(now) {
            // The window may have been closed while the animation ran.
            if self.store.contains(id) {
                let _ = self.store.minimize(id);
            }
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { window, x, y } => self.pointer_down(window, x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::TitlebarDoubleClick { window } => {
                let _ = self.toggle_maximize(window);
            }
        }
    }

    /// Handles a click on a title-bar control button.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn control_clicked(&mut self, id: WindowId, button: ControlButton) -> WmResult<()> {
        match button {
            ControlButton::Minimize => self.minimize_window(id),
            ControlButton::MaximizeRestore => self.toggle_maximize(id),
            ControlButton::Close => self.close_window(id),
        }
    }

    // ========================================================================
    // Host Snapshots
    // ========================================================================

    /// Snapshot of all windows for the host renderer and taskbar,
    /// in creation order.
    #[must_use]
    pub fn windows_info(&self) -> Vec<WindowInfo> { self.store.windows_info(&self.desktop) }

    /// The window currently being dragged or resized, if any.
    #[must_use]
    pub fn interacting_window(&self) -> Option<WindowId> {
        self.interaction.map(|(id, _)| id)
    }

    /// Whether the host should deliver pointer moves and the release
    /// globally instead of per-window.
    ///
    /// True exactly while a drag or resize is in flight; outside an
    /// interaction only per-window events are needed.
    #[must_use]
    pub const fn wants_global_pointer_events(&self) -> bool { self.interaction.is_some() }

    /// The snap rectangle currently previewed by an in-flight drag.
    ///
    /// The host renders this as a translucent overlay; the dragged
    /// window's own geometry is untouched until release.
    #[must_use]
    pub fn preview_snap_frame(&self) -> Option<WindowFrame> {
        self.preview_snap_edge().map(|edge| snap::snap_frame(edge, &self.desktop))
    }

    /// The snap edge currently previewed by an in-flight drag.
    #[must_use]
    pub fn preview_snap_edge(&self) -> Option<SnapEdge> {
        match self.interaction {
            Some((_, Interaction::Dragging(session))) => session.preview_snap,
            _ => None,
        }
    }
}
