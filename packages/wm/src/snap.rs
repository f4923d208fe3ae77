//! Snap layout engine.
//!
//! Pure geometry: classifies a cursor position against the viewport edge
//! bands and produces the rectangle a snap target occupies. The same
//! rectangle doubles as the preview overlay shown during a drag and the
//! committed geometry applied on release.

use fenster_shared::{SnapConfig, SnapEdge};

use crate::state::{Desktop, WindowFrame};

/// Classifies a raw cursor position against the snap bands.
///
/// Bands are checked in a fixed priority order (left, right, then top) so a
/// cursor in a corner region resolves deterministically to one edge.
/// Returns `None` when the cursor is outside every band.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn target_for_cursor(x: i32, y: i32, desktop: &Desktop, config: &SnapConfig) -> Option<SnapEdge> {
    if x <= config.edge_threshold as i32 {
        Some(SnapEdge::Left)
    } else if x >= desktop.width as i32 - config.edge_threshold as i32 {
        Some(SnapEdge::Right)
    } else if y <= config.top_threshold as i32 {
        Some(SnapEdge::Top)
    } else {
        None
    }
}

/// Returns the rectangle a snap target occupies.
///
/// Left and right are exactly half the work area width at full work area
/// height; the right half absorbs the odd pixel. Top is the full work area,
/// the geometric equivalent of maximize.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn snap_frame(edge: SnapEdge, desktop: &Desktop) -> WindowFrame {
    let work = desktop.work_area();
    let half = work.width / 2;

    match edge {
        SnapEdge::Left => WindowFrame::new(work.x, work.y, half, work.height),
        SnapEdge::Right => {
            WindowFrame::new(work.x + half as i32, work.y, work.width - half, work.height)
        }
        SnapEdge::Top => work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Desktop { Desktop::new(1920, 1080, 48) }

    fn config() -> SnapConfig {
        SnapConfig {
            edge_threshold: 12,
            top_threshold: 8,
        }
    }

    #[test]
    fn test_no_target_in_open_area() {
        assert_eq!(target_for_cursor(960, 540, &desktop(), &config()), None);
        assert_eq!(target_for_cursor(13, 540, &desktop(), &config()), None);
        assert_eq!(target_for_cursor(960, 9, &desktop(), &config()), None);
    }

    #[test]
    fn test_edge_bands() {
        assert_eq!(target_for_cursor(0, 540, &desktop(), &config()), Some(SnapEdge::Left));
        assert_eq!(target_for_cursor(12, 540, &desktop(), &config()), Some(SnapEdge::Left));
        assert_eq!(target_for_cursor(1919, 540, &desktop(), &config()), Some(SnapEdge::Right));
        assert_eq!(target_for_cursor(1908, 540, &desktop(), &config()), Some(SnapEdge::Right));
        assert_eq!(target_for_cursor(960, 0, &desktop(), &config()), Some(SnapEdge::Top));
        assert_eq!(target_for_cursor(960, 8, &desktop(), &config()), Some(SnapEdge::Top));
    }

    #[test]
    fn test_corner_priority_is_horizontal_first() {
        // Top-left corner resolves to left, top-right to right.
        assert_eq!(target_for_cursor(0, 0, &desktop(), &config()), Some(SnapEdge::Left));
        assert_eq!(target_for_cursor(1919, 0, &desktop(), &config()), Some(SnapEdge::Right));
    }

    #[test]
    fn test_halves_tile_the_work_area() {
        let d = desktop();
        let left = snap_frame(SnapEdge::Left, &d);
        let right = snap_frame(SnapEdge::Right, &d);
        let work = d.work_area();

        assert_eq!(left, WindowFrame::new(0, 0, 960, 1032));
        assert_eq!(right, WindowFrame::new(960, 0, 960, 1032));
        assert_eq!(left.width + right.width, work.width);
        assert_eq!(left.height, work.height);
    }

    #[test]
    fn test_right_half_absorbs_odd_pixel() {
        let d = Desktop::new(1001, 800, 0);
        let left = snap_frame(SnapEdge::Left, &d);
        let right = snap_frame(SnapEdge::Right, &d);

        assert_eq!(left.width, 500);
        assert_eq!(right.x, 500);
        assert_eq!(right.width, 501);
    }

    #[test]
    fn test_top_is_full_work_area() {
        let d = desktop();
        assert_eq!(snap_frame(SnapEdge::Top, &d), d.work_area());
    }
}
