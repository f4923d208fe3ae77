//! Input event queue between the host shell and the window manager.
//!
//! The host pushes pointer events from its event loop thread; the manager
//! drains the queue once per frame. Consecutive pointer-move events are
//! coalesced before dispatch, since only the latest position matters for an
//! in-flight drag or resize and the host can produce several moves per
//! frame.

use parking_lot::Mutex;

use crate::state::WindowId;

/// A pointer input event from the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a window.
    PointerDown {
        /// The window under the pointer.
        window: WindowId,
        /// Viewport x coordinate.
        x: i32,
        /// Viewport y coordinate.
        y: i32,
    },

    /// Pointer moved. Delivered globally while an interaction is in
    /// flight, so coordinates may lie outside any window.
    PointerMove {
        /// Viewport x coordinate.
        x: i32,
        /// Viewport y coordinate.
        y: i32,
    },

    /// Primary button released.
    PointerUp {
        /// Viewport x coordinate.
        x: i32,
        /// Viewport y coordinate.
        y: i32,
    },

    /// Double click on a window's title bar.
    TitlebarDoubleClick {
        /// The window whose title bar was double clicked.
        window: WindowId,
    },
}

impl InputEvent {
    const fn is_move(&self) -> bool { matches!(self, Self::PointerMove { .. }) }
}

/// Thread-safe queue of pending input events.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Mutex<Vec<InputEvent>>,
}

impl InputQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Pushes an event onto the queue.
    pub fn push(&self, event: InputEvent) { self.events.lock().push(event); }

    /// Drains all pending events, with consecutive moves coalesced.
    #[must_use]
    pub fn take_all(&self) -> Vec<InputEvent> {
        let drained = std::mem::take(&mut *self.events.lock());
        coalesce_moves(drained)
    }
}

/// Collapses each run of consecutive pointer-move events to its last
/// element. Non-move events are kept as ordering barriers: a move, a down,
/// and another move never merge across the down.
#[must_use]
pub fn coalesce_moves(events: Vec<InputEvent>) -> Vec<InputEvent> {
    let mut out: Vec<InputEvent> = Vec::with_capacity(events.len());

    for event in events {
        if event.is_move()
            && let Some(last) = out.last_mut()
            && last.is_move()
        {
            *last = event;
            continue;
        }
        out.push(event);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(x: i32, y: i32) -> InputEvent { InputEvent::PointerMove { x, y } }

    #[test]
    fn test_queue_drains_in_order() {
        let queue = InputQueue::new();
        queue.push(InputEvent::PointerDown { window: WindowId::new(1), x: 5, y: 5 });
        queue.push(InputEvent::PointerUp { x: 6, y: 6 });

        let events = queue.take_all();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerDown { .. }));
        assert!(matches!(events[1], InputEvent::PointerUp { .. }));

        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn test_consecutive_moves_collapse_to_last() {
        let events = coalesce_moves(vec![mv(1, 1), mv(2, 2), mv(3, 3)]);
        assert_eq!(events, vec![mv(3, 3)]);
    }

    #[test]
    fn test_non_move_events_are_barriers() {
        let down = InputEvent::PointerDown { window: WindowId::new(1), x: 0, y: 0 };
        let events = coalesce_moves(vec![mv(1, 1), mv(2, 2), down, mv(3, 3), mv(4, 4)]);
        assert_eq!(events, vec![mv(2, 2), down, mv(4, 4)]);
    }

    #[test]
    fn test_empty_queue_is_fine() {
        assert!(coalesce_moves(Vec::new()).is_empty());
    }
}
