//! The canonical element model.
//!
//! An `Element` is one architectural object (wall, door or window). Its
//! millimeter dimensions live in the type-tagged `ElementProps`; its
//! plan-view footprint is kept in editor pixels and is recomputed atomically
//! whenever a mm dimension changes, so the two representations never diverge.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use floorkit_core::units::mm_to_editor_px;
use floorkit_core::{MutationError, Point, Result};

mod door;
mod wall;
mod window;

pub use door::{DoorMaterial, DoorProps, HingeSide, SwingDirection};
pub use wall::{WallMaterial, WallProps};
pub use window::{Glazing, WindowProps, WindowStyle};

/// Stable element identifier, assigned at creation and never reused.
pub type ElementId = Uuid;

/// Element kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wall,
    Door,
    Window,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}

/// Plan-view footprint in editor pixels at native zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Type-tagged property bag. Which keys are valid for which kind is a
/// compile-time fact, not a runtime convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementProps {
    Wall(WallProps),
    Door(DoorProps),
    Window(WindowProps),
}

/// Numeric property keys accepted by `Element::update_property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    /// Wall cross-section thickness.
    Thickness,
    /// Wall run length.
    Length,
    /// Opening width (door/window).
    Width,
    /// Opening depth across the wall (door/window).
    Depth,
    /// Vertical extent (wall/door).
    Height,
    /// Window sill height from floor.
    HeightFrom,
    /// Window head height from floor.
    HeightTo,
}

impl PropertyKey {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Thickness => "thickness",
            Self::Length => "length",
            Self::Width => "width",
            Self::Depth => "depth",
            Self::Height => "height",
            Self::HeightFrom => "height_from",
            Self::HeightTo => "height_to",
        }
    }
}

/// One architectural object.
///
/// `position` is the top-left anchor of the plan footprint in editor pixels
/// (origin at the floor's northwest corner). `rotation` is degrees; the
/// controller only ever commits right-angle increments, but the model accepts
/// continuous values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub position: Point,
    pub rotation: f64,
    pub footprint: Footprint,
    pub props: ElementProps,
}

impl Element {
    /// Creates an element at the requested anchor with per-kind defaults.
    /// The position is taken as-is; snapping happens when the controller
    /// commits the placement.
    pub fn new(kind: ElementKind, position: Point) -> Self {
        let (footprint, props) = match kind {
            ElementKind::Wall => {
                let p = WallProps::default();
                (p.footprint(), ElementProps::Wall(p))
            }
            ElementKind::Door => {
                let p = DoorProps::default();
                (p.footprint(), ElementProps::Door(p))
            }
            ElementKind::Window => {
                let p = WindowProps::default();
                (p.footprint(), ElementProps::Window(p))
            }
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            rotation: 0.0,
            footprint,
            props,
        }
    }

    /// Center of the plan footprint, the pivot for rotation.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.footprint.width / 2.0,
            self.position.y + self.footprint.height / 2.0,
        )
    }

    /// Rotates by `delta` degrees. The result is normalized into [0, 360).
    pub fn rotate(&mut self, delta: f64) {
        self.rotation = (self.rotation + delta).rem_euclid(360.0);
    }

    /// Updates a numeric millimeter property, revalidating invariants and
    /// recomputing the pixel footprint in the same step. On rejection the
    /// element is left untouched.
    pub fn update_property(&mut self, key: PropertyKey, value_mm: f64) -> Result<()> {
        match &mut self.props {
            ElementProps::Wall(p) => {
                let footprint = p.update(key, value_mm, self.kind)?;
                self.footprint = footprint;
            }
            ElementProps::Door(p) => {
                let footprint = p.update(key, value_mm, self.kind)?;
                self.footprint = footprint;
            }
            ElementProps::Window(p) => {
                let footprint = p.update(key, value_mm, self.kind)?;
                self.footprint = footprint;
            }
        }
        Ok(())
    }

    /// Replaces the pixel footprint (a plan-view resize), pushing the new
    /// dimensions back into the mm properties so both stay consistent.
    pub fn set_footprint_px(&mut self, width: f64, height: f64) -> Result<()> {
        if width <= 0.0 {
            return Err(MutationError::NonPositiveDimension {
                key: "width".into(),
                value: width,
            });
        }
        if height <= 0.0 {
            return Err(MutationError::NonPositiveDimension {
                key: "height".into(),
                value: height,
            });
        }
        match &mut self.props {
            ElementProps::Wall(p) => p.absorb_footprint(width, height),
            ElementProps::Door(p) => p.absorb_footprint(width, height),
            ElementProps::Window(p) => p.absorb_footprint(width, height),
        }
        self.footprint = Footprint::new(width, height);
        Ok(())
    }

    /// Axis-aligned bounds of the rotated footprint, in editor pixels.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let c = self.center();
        let corners = [
            self.position,
            Point::new(self.position.x + self.footprint.width, self.position.y),
            Point::new(
                self.position.x + self.footprint.width,
                self.position.y + self.footprint.height,
            ),
            Point::new(self.position.x, self.position.y + self.footprint.height),
        ];
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for corner in corners {
            let p = rotate_point(corner, c, self.rotation);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Hit test against the rotated footprint with a tolerance band, used
    /// for click selection. The point is rotated into local coordinates
    /// rather than rotating the rectangle.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        let c = self.center();
        let local = rotate_point(p, c, -self.rotation);
        let half_w = self.footprint.width / 2.0;
        let half_h = self.footprint.height / 2.0;
        (local.x - c.x).abs() <= half_w + tolerance && (local.y - c.y).abs() <= half_h + tolerance
    }

    /// The millimeter dimensions `{width, depth, height}` the 3D adapters
    /// consume: width/depth span the plan footprint, height is the vertical
    /// extent.
    pub fn dimensions_mm(&self) -> (f64, f64, f64) {
        match &self.props {
            ElementProps::Wall(p) => (p.thickness_mm, p.length_mm, p.height_mm),
            ElementProps::Door(p) => (p.width_mm, p.depth_mm, p.height_mm),
            ElementProps::Window(p) => {
                (p.width_mm, p.depth_mm, p.height_to_mm - p.height_from_mm)
            }
        }
    }
}

/// Rotates `p` about `center` by `angle_deg` degrees.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Guard shared by the per-kind updaters: dimension-bearing keys must stay
/// strictly positive.
pub(crate) fn require_positive(key: PropertyKey, value_mm: f64) -> Result<()> {
    if value_mm <= 0.0 {
        return Err(MutationError::NonPositiveDimension {
            key: key.name().into(),
            value: value_mm,
        });
    }
    Ok(())
}

pub(crate) fn not_applicable(key: PropertyKey, kind: ElementKind) -> MutationError {
    MutationError::PropertyNotApplicable {
        key: key.name().into(),
        kind: kind.name().into(),
    }
}

pub(crate) fn px(mm: f64) -> f64 {
    mm_to_editor_px(mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_defaults_keep_mm_and_px_consistent() {
        let wall = Element::new(ElementKind::Wall, Point::new(1000.0, 1000.0));
        assert_eq!(wall.footprint, Footprint::new(20.0, 100.0));
        match &wall.props {
            ElementProps::Wall(p) => {
                assert_eq!(p.thickness_mm, 200.0);
                assert_eq!(p.length_mm, 1000.0);
                assert_eq!(p.height_mm, 2400.0);
            }
            other => panic!("expected wall props, got {other:?}"),
        }
    }

    #[test]
    fn test_update_length_recomputes_footprint() {
        let mut wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        wall.update_property(PropertyKey::Length, 3600.0).unwrap();
        assert_eq!(wall.footprint.height, 360.0);
        match &wall.props {
            ElementProps::Wall(p) => assert_eq!(p.length_mm, 3600.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let mut wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let before = wall.clone();
        let err = wall.update_property(PropertyKey::Thickness, 0.0).unwrap_err();
        assert!(matches!(err, MutationError::NonPositiveDimension { .. }));
        assert_eq!(wall, before);
    }

    #[test]
    fn test_wrong_kind_key_rejected() {
        let mut door = Element::new(ElementKind::Door, Point::new(0.0, 0.0));
        let err = door.update_property(PropertyKey::Length, 1200.0).unwrap_err();
        assert!(matches!(err, MutationError::PropertyNotApplicable { .. }));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        wall.rotate(90.0);
        wall.rotate(90.0);
        wall.rotate(90.0);
        wall.rotate(90.0);
        assert_eq!(wall.rotation, 0.0);
        wall.rotate(-90.0);
        assert_eq!(wall.rotation, 270.0);
    }

    #[test]
    fn test_contains_rotated() {
        let mut wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        // 20x100 footprint centered at (10, 50)
        assert!(wall.contains(Point::new(10.0, 50.0), 0.0));
        assert!(!wall.contains(Point::new(60.0, 50.0), 0.0));
        wall.rotate(90.0);
        // After a quarter turn the long axis runs along x
        assert!(wall.contains(Point::new(55.0, 50.0), 0.0));
        assert!(!wall.contains(Point::new(10.0, 90.0), 0.0));
    }

    #[test]
    fn test_resize_pushes_back_to_mm() {
        let mut wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        wall.set_footprint_px(45.0, 180.0).unwrap();
        match &wall.props {
            ElementProps::Wall(p) => {
                assert_eq!(p.thickness_mm, 450.0);
                assert_eq!(p.length_mm, 1800.0);
            }
            _ => unreachable!(),
        }
    }
}
