//! The window geometry store.
//!
//! Single source of truth for all persisted window state. Every geometry
//! and flag change flows through the mutators on [`WindowStore`]; the
//! pointer interaction machinery reads records and writes back through
//! these methods, never around them. The store is an explicit value owned
//! by the manager (injected, not ambient), which keeps it testable in
//! isolation.

use std::collections::HashMap;

use fenster_shared::{SnapEdge, WindowInfo};
use smallvec::SmallVec;

use crate::error::{WmError, WmResult};
use crate::snap;
use crate::state::{Desktop, WindowFrame, WindowId, WindowRecord};

/// Type alias for window id lists that are typically small.
///
/// A desktop session rarely has more than 8 windows open, so we
/// stack-allocate for the common case.
pub type WindowIdList = SmallVec<[WindowId; 8]>;

/// Owns one [`WindowRecord`] per open window and enforces the stacking and
/// state invariants:
///
/// - the active window holds the strictly maximal `z_index` (maintained via
///   a monotonic counter),
/// - a window is never simultaneously maximized and snapped,
/// - `width >= min_width` and `height >= min_height` after every commit,
/// - `y >= 0` after every position commit.
///
/// Closing or minimizing the active window leaves `active_window` pointing
/// at it; no automatic re-focus happens until another window is explicitly
/// focused.
#[derive(Debug, Default)]
pub struct WindowStore {
    /// All windows by id.
    windows: HashMap<WindowId, WindowRecord>,

    /// Window ids in creation order, for stable taskbar iteration.
    order: WindowIdList,

    /// The active window id. May point at a closed or minimized window.
    active: Option<WindowId>,

    /// Next z-index to hand out; strictly greater than every assigned one.
    next_z: i32,

    /// Next raw window id.
    next_id: u64,
}

impl WindowStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of open windows.
    #[must_use]
    pub fn len(&self) -> usize { self.windows.len() }

    /// Returns whether no windows are open.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.windows.is_empty() }

    /// Returns whether the window id refers to an open window.
    #[must_use]
    pub fn contains(&self, id: WindowId) -> bool { self.windows.contains_key(&id) }

    /// Gets a window by id.
    #[must_use]
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> { self.windows.get(&id) }

    /// The active window id, if any window has ever been focused.
    #[must_use]
    pub const fn active_window(&self) -> Option<WindowId> { self.active }

    fn record_mut(&mut self, id: WindowId) -> WmResult<&mut WindowRecord> {
        self.windows.get_mut(&id).ok_or(WmError::WindowNotFound(id))
    }

    /// Opens a new window and focuses it.
    ///
    /// The returned id is unique for the lifetime of the store.
    pub fn open(
        &mut self,
        app_id: &str,
        title: &str,
        frame: WindowFrame,
        min_width: u32,
        min_height: u32,
    ) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;

        let z_index = self.next_z;
        self.next_z += 1;

        self.windows.insert(id, WindowRecord {
            id,
            app_id: app_id.to_string(),
            title: title.to_string(),
            frame,
            min_width,
            min_height,
            is_maximized: false,
            is_minimized: false,
            snap_edge: None,
            restore_frame: None,
            z_index,
        });
        self.order.push(id);
        self.active = Some(id);

        id
    }

    /// Closes a window, removing its record.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn close(&mut self, id: WindowId) -> WmResult<()> {
        self.windows.remove(&id).ok_or(WmError::WindowNotFound(id))?;
        self.order.retain(|open| *open != id);
        Ok(())
    }

    /// Focuses a window, raising it above every other open window.
    ///
    /// No-op if the window is already active; otherwise it receives a
    /// z-index strictly greater than the current maximum.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn focus(&mut self, id: WindowId) -> WmResult<()> {
        if !self.contains(id) {
            return Err(WmError::WindowNotFound(id));
        }
        if self.active == Some(id) {
            return Ok(());
        }

        let z_index = self.next_z;
        self.next_z += 1;

        let record = self.record_mut(id)?;
        record.z_index = z_index;
        self.active = Some(id);

        Ok(())
    }

    /// Commits a window position. `y` is clamped so the title bar cannot
    /// leave the top of the viewport.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn set_position(&mut self, id: WindowId, x: i32, y: i32) -> WmResult<()> {
        let record = self.record_mut(id)?;
        record.frame.x = x;
        record.frame.y = y.max(0);
        Ok(())
    }

    /// Commits a window size, clamped to the window's minimums.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn set_size(&mut self, id: WindowId, width: u32, height: u32) -> WmResult<()> {
        let record = self.record_mut(id)?;
        record.frame.width = width.max(record.min_width);
        record.frame.height = height.max(record.min_height);
        Ok(())
    }

    /// Marks a window minimized. Its record (and taskbar entry) survive;
    /// only the stacking-area rendering goes away.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn minimize(&mut self, id: WindowId) -> WmResult<()> {
        self.record_mut(id)?.is_minimized = true;
        Ok(())
    }

    /// Brings a minimized window back. Purely a data-level inverse of
    /// [`Self::minimize`]; there is no fly-in animation.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn unminimize(&mut self, id: WindowId) -> WmResult<()> {
        self.record_mut(id)?.is_minimized = false;
        Ok(())
    }

    /// Maximizes a window to the full work area.
    ///
    /// The current floating geometry is captured as the restore frame
    /// (once, so later snaps keep the original). Clears any snap edge.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn maximize(&mut self, id: WindowId) -> WmResult<()> {
        let record = self.record_mut(id)?;
        if record.can_resize() {
            record.restore_frame = Some(record.frame);
        }
        record.is_maximized = true;
        record.snap_edge = None;
        Ok(())
    }

    /// Snaps a window to an edge, committing the snap rectangle as its
    /// geometry.
    ///
    /// Snapping never sets the maximized flag, even for `SnapEdge::Top`;
    /// the two states are tracked separately so restore behaves the same
    /// from either origin.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn snap(&mut self, id: WindowId, edge: SnapEdge, desktop: &Desktop) -> WmResult<()> {
        let target = snap::snap_frame(edge, desktop);
        let record = self.record_mut(id)?;
        if record.can_resize() {
            record.restore_frame = Some(record.frame);
        }
        record.is_maximized = false;
        record.snap_edge = Some(edge);
        record.frame = target;
        Ok(())
    }

    /// Restores a maximized or snapped window to its pre-snap/pre-maximize
    /// geometry. No-op for floating windows.
    ///
    /// # Errors
    ///
    /// Returns `WmError::WindowNotFound` if the id is stale.
    pub fn restore(&mut self, id: WindowId) -> WmResult<()> {
        let record = self.record_mut(id)?;
        if record.can_resize() {
            return Ok(());
        }
        record.is_maximized = false;
        record.snap_edge = None;
        if let Some(frame) = record.restore_frame.take() {
            record.frame = frame;
        }
        Ok(())
    }

    /// Open, non-minimized windows in stacking order (bottom to top).
    #[must_use]
    pub fn stacking(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.values().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// All open windows in creation order, converted for the host.
    #[must_use]
    pub fn windows_info(&self, desktop: &Desktop) -> Vec<WindowInfo> {
        self.order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .map(|w| w.to_info(self.active == Some(w.id), desktop))
            .collect()
    }
}
