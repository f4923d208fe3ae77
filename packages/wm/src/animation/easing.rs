//! Easing curves and interpolation helpers for window animations.

use fenster_shared::EasingFunction;

/// Applies the configured easing curve to a progress value in `[0, 1]`.
#[inline]
#[must_use]
pub fn apply_easing(easing: EasingFunction, t: f32) -> f32 {
    match easing {
        EasingFunction::Linear => t,
        EasingFunction::EaseIn => simple_easing::cubic_in(t),
        EasingFunction::EaseOut => simple_easing::cubic_out(t),
        EasingFunction::EaseInOut => simple_easing::cubic_in_out(t),
    }
}

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 { (end - start).mul_add(t, start) }

/// Linear interpolation between two pixel positions.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn lerp_i32(start: i32, end: i32, t: f32) -> i32 {
    lerp_f32(start as f32, end as f32, t).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_lerp_f32() {
        assert!((lerp_f32(0.0, 100.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((lerp_f32(0.0, 100.0, 0.5) - 50.0).abs() < EPSILON);
        assert!((lerp_f32(0.0, 100.0, 1.0) - 100.0).abs() < EPSILON);
        assert!((lerp_f32(50.0, 150.0, 0.25) - 75.0).abs() < EPSILON);
    }

    #[test]
    fn test_lerp_i32_rounds() {
        assert_eq!(lerp_i32(0, 10, 0.0), 0);
        assert_eq!(lerp_i32(0, 10, 0.5), 5);
        assert_eq!(lerp_i32(0, 10, 1.0), 10);
        assert_eq!(lerp_i32(0, 3, 0.5), 2); // 1.5 rounds up
        assert_eq!(lerp_i32(10, -10, 0.5), 0);
    }

    #[test]
    fn test_easing_endpoints_are_fixed() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert!(apply_easing(easing, 0.0).abs() < EPSILON, "{easing:?} at 0");
            assert!((apply_easing(easing, 1.0) - 1.0).abs() < EPSILON, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_starts_slow() {
        assert!(apply_easing(EasingFunction::EaseIn, 0.5) < 0.5);
    }

    #[test]
    fn test_ease_out_starts_fast() {
        assert!(apply_easing(EasingFunction::EaseOut, 0.5) > 0.5);
    }

    #[test]
    fn test_ease_in_out_is_symmetric_around_midpoint() {
        let early = apply_easing(EasingFunction::EaseInOut, 0.25);
        let late = apply_easing(EasingFunction::EaseInOut, 0.75);
        assert!((early + late - 1.0).abs() < 1e-4);
    }
}
