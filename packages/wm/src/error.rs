//! Error types for the window manager.
//!
//! Geometry edge cases are not errors: resize deltas below the minimum size
//! are clamped, a missing taskbar anchor falls back to a fixed point, and
//! dragging a maximized window is a defined transition. The only recoverable
//! error paths are lookups against window ids that no longer exist.

use std::fmt;

use crate::state::WindowId;

/// Result type alias for window manager operations.
pub type WmResult<T> = Result<T, WmError>;

/// Errors that can occur during window management operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmError {
    /// A window with the given id was not found.
    ///
    /// Window ids become invalid once the window is closed; operations
    /// arriving after a close (stale events, late timers) land here.
    WindowNotFound(WindowId),
}

impl WmError {
    /// Returns `true` if this error indicates a resource was not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool { matches!(self, Self::WindowNotFound(_)) }
}

impl fmt::Display for WmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "Window {id} not found"),
        }
    }
}

impl std::error::Error for WmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = WmError::WindowNotFound(WindowId::new(3));
        assert_eq!(err.to_string(), "Window 3 not found");
        assert!(err.is_not_found());
    }
}
