//! Minimize animation: fly a window toward its taskbar entry, then commit.
//!
//! The animator owns two pieces of state. The anchor registry maps window
//! ids to taskbar icon centers and is kept current by the taskbar component
//! itself, so no DOM-style lookup happens at minimize time; a missing anchor
//! is an expected condition that resolves to a fixed bottom-center fallback.
//! The pending map tracks in-flight animations: while one is running the
//! window is still rendered (with the sampled transform applied) and the
//! store's minimize commit is deferred until the duration elapses. Closing
//! a window cancels its pending animation so the deferred commit can never
//! act on a stale id.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use fenster_shared::AnimationSettings;
use serde::Serialize;

use crate::animation::easing::{apply_easing, lerp_f32};
use crate::constants::animation::FALLBACK_BOTTOM_OFFSET;
use crate::state::{Desktop, Point, WindowId};

/// Registry of taskbar anchor points, updated by the taskbar component.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    anchors: HashMap<WindowId, Point>,
}

impl AnchorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Records (or moves) the taskbar anchor for a window.
    pub fn set(&mut self, id: WindowId, center: Point) { self.anchors.insert(id, center); }

    /// Removes a window's anchor, e.g. when its taskbar entry unmounts.
    pub fn clear(&mut self, id: WindowId) { self.anchors.remove(&id); }

    /// Returns the registered anchor for a window.
    #[must_use]
    pub fn get(&self, id: WindowId) -> Option<Point> { self.anchors.get(&id).copied() }

    /// Resolves the animation target: the registered anchor, or the fixed
    /// bottom-center fallback point.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn target_for(&self, id: WindowId, desktop: &Desktop) -> Point {
        self.get(id).unwrap_or_else(|| {
            Point::new(
                desktop.width as i32 / 2,
                desktop.height as i32 - FALLBACK_BOTTOM_OFFSET as i32,
            )
        })
    }
}

/// CSS-transform sample for a window mid-minimize, consumed by the host
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimizeTransform {
    /// Horizontal translation of the window center, in pixels.
    pub translate_x: f32,

    /// Vertical translation of the window center, in pixels.
    pub translate_y: f32,

    /// Uniform scale factor, 1.0 down to 0.0.
    pub scale: f32,

    /// Opacity, 1.0 down to 0.0.
    pub opacity: f32,
}

/// A single in-flight minimize animation.
#[derive(Debug, Clone)]
struct MinimizeAnimation {
    /// Window center when the animation started.
    start_center: Point,

    /// Taskbar anchor (or fallback) the window flies toward.
    target: Point,

    /// When the animation started.
    started: Instant,

    /// Total animation duration.
    duration: Duration,

    /// Easing curve from the animation settings.
    easing: fenster_shared::EasingFunction,
}

impl MinimizeAnimation {
    /// Returns the progress of the animation at `now`, from 0.0 to 1.0.
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_complete(&self, now: Instant) -> bool { self.progress(now) >= 1.0 }

    /// Samples the transform at `now`.
    #[allow(clippy::cast_precision_loss)]
    fn transform(&self, now: Instant) -> MinimizeTransform {
        let eased = apply_easing(self.easing, self.progress(now));
        let dx = (self.target.x - self.start_center.x) as f32;
        let dy = (self.target.y - self.start_center.y) as f32;

        MinimizeTransform {
            translate_x: lerp_f32(0.0, dx, eased),
            translate_y: lerp_f32(0.0, dy, eased),
            scale: lerp_f32(1.0, 0.0, eased),
            opacity: lerp_f32(1.0, 0.0, eased),
        }
    }
}

/// Tracks in-flight minimize animations and their deferred commits.
#[derive(Debug, Default)]
pub struct MinimizeAnimator {
    /// Pending animations by window id.
    pending: HashMap<WindowId, MinimizeAnimation>,
}

impl MinimizeAnimator {
    /// Creates an animator with no pending animations.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Starts a minimize animation for a window.
    ///
    /// Replaces any animation already pending for the same window.
    pub fn start(
        &mut self,
        id: WindowId,
        start_center: Point,
        target: Point,
        settings: &AnimationSettings,
        now: Instant,
    ) {
        self.pending.insert(id, MinimizeAnimation {
            start_center,
            target,
            started: now,
            duration: Duration::from_millis(u64::from(settings.duration)),
            easing: settings.easing,
        });
    }

    /// Returns whether a window has a minimize animation in flight.
    #[must_use]
    pub fn is_animating(&self, id: WindowId) -> bool { self.pending.contains_key(&id) }

    /// Samples the transform for a window's in-flight animation.
    #[must_use]
    pub fn transform(&self, id: WindowId, now: Instant) -> Option<MinimizeTransform> {
        self.pending.get(&id).map(|anim| anim.transform(now))
    }

    /// Cancels a window's pending animation without committing.
    ///
    /// Must be called when a window is closed mid-animation.
    pub fn cancel(&mut self, id: WindowId) { self.pending.remove(&id); }

    /// Removes and returns the windows whose animations have completed.
    ///
    /// The caller commits `is_minimized = true` for each returned id.
    pub fn drain_completed(&mut self, now: Instant) -> Vec<WindowId> {
        let completed: Vec<WindowId> = self
            .pending
            .iter()
            .filter(|(_, anim)| anim.is_complete(now))
            .map(|(id, _)| *id)
            .collect();

        for id in &completed {
            self.pending.remove(id);
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Desktop { Desktop::new(1280, 800, 48) }

    fn settings(duration: u32) -> AnimationSettings {
        AnimationSettings {
            duration,
            easing: fenster_shared::EasingFunction::Linear,
        }
    }

    #[test]
    fn test_anchor_fallback_is_bottom_center() {
        let registry = AnchorRegistry::new();
        let target = registry.target_for(WindowId::new(1), &desktop());
        assert_eq!(target, Point::new(640, 776));
    }

    #[test]
    fn test_registered_anchor_wins() {
        let mut registry = AnchorRegistry::new();
        let id = WindowId::new(1);
        registry.set(id, Point::new(120, 780));

        assert_eq!(registry.target_for(id, &desktop()), Point::new(120, 780));

        registry.clear(id);
        assert_eq!(registry.target_for(id, &desktop()), Point::new(640, 776));
    }

    #[test]
    fn test_transform_interpolates_toward_target() {
        let mut animator = MinimizeAnimator::new();
        let id = WindowId::new(1);
        let now = Instant::now();
        animator.start(id, Point::new(400, 300), Point::new(600, 700), &settings(200), now);

        let start = animator.transform(id, now).unwrap();
        assert!((start.translate_x - 0.0).abs() < f32::EPSILON);
        assert!((start.scale - 1.0).abs() < f32::EPSILON);
        assert!((start.opacity - 1.0).abs() < f32::EPSILON);

        let mid = animator.transform(id, now + Duration::from_millis(100)).unwrap();
        assert!((mid.translate_x - 100.0).abs() < 0.5);
        assert!((mid.translate_y - 200.0).abs() < 0.5);
        assert!((mid.scale - 0.5).abs() < 0.01);

        let end = animator.transform(id, now + Duration::from_millis(200)).unwrap();
        assert!((end.translate_x - 200.0).abs() < f32::EPSILON);
        assert!((end.translate_y - 400.0).abs() < f32::EPSILON);
        assert!(end.scale.abs() < f32::EPSILON);
        assert!(end.opacity.abs() < f32::EPSILON);
    }

    #[test]
    fn test_drain_completed_respects_duration() {
        let mut animator = MinimizeAnimator::new();
        let id = WindowId::new(1);
        let now = Instant::now();
        animator.start(id, Point::new(0, 0), Point::new(100, 100), &settings(200), now);

        assert!(animator.drain_completed(now).is_empty());
        assert!(animator.drain_completed(now + Duration::from_millis(199)).is_empty());

        let done = animator.drain_completed(now + Duration::from_millis(200));
        assert_eq!(done, vec![id]);
        assert!(!animator.is_animating(id));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut animator = MinimizeAnimator::new();
        let id = WindowId::new(1);
        let now = Instant::now();
        animator.start(id, Point::new(0, 0), Point::new(50, 50), &settings(0), now);

        assert_eq!(animator.drain_completed(now), vec![id]);
    }

    #[test]
    fn test_cancel_discards_pending_commit() {
        let mut animator = MinimizeAnimator::new();
        let id = WindowId::new(1);
        let now = Instant::now();
        animator.start(id, Point::new(0, 0), Point::new(50, 50), &settings(100), now);

        animator.cancel(id);

        assert!(!animator.is_animating(id));
        assert!(animator.drain_completed(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_restart_replaces_pending_animation() {
        let mut animator = MinimizeAnimator::new();
        let id = WindowId::new(1);
        let now = Instant::now();
        animator.start(id, Point::new(0, 0), Point::new(50, 50), &settings(100), now);

        // Restarting resets the clock; the old deadline no longer applies.
        let later = now + Duration::from_millis(90);
        animator.start(id, Point::new(0, 0), Point::new(50, 50), &settings(100), later);

        assert!(animator.drain_completed(now + Duration::from_millis(110)).is_empty());
        assert_eq!(animator.drain_completed(later + Duration::from_millis(100)), vec![id]);
    }

    #[test]
    fn test_transform_serializes_camel_case() {
        let transform = MinimizeTransform {
            translate_x: 10.0,
            translate_y: -4.0,
            scale: 0.5,
            opacity: 0.5,
        };
        let json = serde_json::to_string(&transform).unwrap();
        assert!(json.contains("\"translateX\":10.0"));
        assert!(json.contains("\"opacity\":0.5"));
    }
}
