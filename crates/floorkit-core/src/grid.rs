//! Grid snapping.
//!
//! Quantizes coordinates to the nearest grid cell: the 900 mm architectural
//! module for mm-valued data, the 45 px editor grid for plan-view positions.
//! Snapping is applied when a drag or placement is committed, never mid-drag.

use crate::constants::{GRID_SIZE_MM, GRID_SIZE_PX};
use crate::types::Point;

/// Snaps a millimeter value to the nearest architectural module.
pub fn snap_mm(value: f64) -> f64 {
    (value / GRID_SIZE_MM).round() * GRID_SIZE_MM
}

/// Snaps an editor-pixel value to the nearest grid cell.
pub fn snap_px(value: f64) -> f64 {
    (value / GRID_SIZE_PX).round() * GRID_SIZE_PX
}

/// Snaps a plan-view point, applying `snap_px` independently per axis.
pub fn snap_point(p: Point) -> Point {
    Point::new(snap_px(p.x), snap_px(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_px_nearest_cell() {
        assert_eq!(snap_px(1033.0), 1035.0);
        assert_eq!(snap_px(1012.0), 990.0);
        assert_eq!(snap_px(0.0), 0.0);
        assert_eq!(snap_px(22.4), 0.0);
        assert_eq!(snap_px(22.6), 45.0);
    }

    #[test]
    fn test_snap_mm_nearest_module() {
        assert_eq!(snap_mm(1000.0), 900.0);
        assert_eq!(snap_mm(1400.0), 1800.0);
        assert_eq!(snap_mm(-430.0), 0.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        for v in [-1234.5, -45.0, 0.0, 22.5, 1033.0, 99999.0] {
            assert_eq!(snap_px(snap_px(v)), snap_px(v));
            assert_eq!(snap_mm(snap_mm(v)), snap_mm(v));
        }
    }

    #[test]
    fn test_snap_lands_on_grid() {
        for v in [1.0, 17.0, 1033.0, 1012.0, 5000.5] {
            assert_eq!(snap_px(v) % GRID_SIZE_PX, 0.0);
            assert_eq!(snap_mm(v) % GRID_SIZE_MM, 0.0);
        }
    }

    #[test]
    fn test_snap_point_per_axis() {
        let p = snap_point(Point::new(1033.0, 1012.0));
        assert_eq!(p, Point::new(1035.0, 990.0));
    }
}
