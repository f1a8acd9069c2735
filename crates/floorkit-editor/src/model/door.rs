//! Door properties and the plan-view swing symbol.

use serde::{Deserialize, Serialize};

use floorkit_core::constants::SWING_ARC_SEGMENTS;
use floorkit_core::units::editor_px_to_mm;
use floorkit_core::{Point, Result};

use super::{
    not_applicable, px, require_positive, rotate_point, Element, ElementKind, ElementProps,
    Footprint, PropertyKey,
};

/// Which way the leaf swings relative to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingDirection {
    Inward,
    Outward,
}

/// Which jamb carries the hinges, seen from outside the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    Right,
}

/// Door leaf material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorMaterial {
    Wood,
    Steel,
    Glass,
}

/// Millimeter properties of a door. Footprint width is the opening width,
/// footprint height is the depth across the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorProps {
    pub width_mm: f64,
    pub depth_mm: f64,
    pub height_mm: f64,
    pub material: DoorMaterial,
    pub swing: SwingDirection,
    pub hinge: HingeSide,
}

impl Default for DoorProps {
    fn default() -> Self {
        Self {
            width_mm: 900.0,
            depth_mm: 100.0,
            height_mm: 2000.0,
            material: DoorMaterial::Wood,
            swing: SwingDirection::Inward,
            hinge: HingeSide::Left,
        }
    }
}

impl DoorProps {
    pub(crate) fn footprint(&self) -> Footprint {
        Footprint::new(px(self.width_mm), px(self.depth_mm))
    }

    pub(crate) fn update(
        &mut self,
        key: PropertyKey,
        value_mm: f64,
        kind: ElementKind,
    ) -> Result<Footprint> {
        match key {
            PropertyKey::Width => {
                require_positive(key, value_mm)?;
                self.width_mm = value_mm;
            }
            PropertyKey::Depth => {
                require_positive(key, value_mm)?;
                self.depth_mm = value_mm;
            }
            PropertyKey::Height => {
                require_positive(key, value_mm)?;
                self.height_mm = value_mm;
            }
            PropertyKey::Thickness
            | PropertyKey::Length
            | PropertyKey::HeightFrom
            | PropertyKey::HeightTo => return Err(not_applicable(key, kind)),
        }
        Ok(self.footprint())
    }

    pub(crate) fn absorb_footprint(&mut self, width_px: f64, height_px: f64) {
        self.width_mm = editor_px_to_mm(width_px);
        self.depth_mm = editor_px_to_mm(height_px);
    }
}

impl Element {
    /// Hinge point of a door in plan coordinates (editor px), `None` for
    /// other kinds.
    pub fn door_hinge(&self) -> Option<Point> {
        let props = match &self.props {
            ElementProps::Door(p) => p,
            _ => return None,
        };
        let local = match props.hinge {
            HingeSide::Left => self.position,
            HingeSide::Right => Point::new(self.position.x + self.footprint.width, self.position.y),
        };
        Some(rotate_point(local, self.center(), self.rotation))
    }

    /// Quarter-circle swing arc from the hinge point, radius = door width,
    /// flattened to a 16-segment polyline. `None` for non-doors.
    ///
    /// The segment count is a rendering-fidelity choice; the geometric
    /// contract is only "quarter circle from the hinge".
    pub fn door_swing_arc(&self) -> Option<Vec<Point>> {
        let props = match &self.props {
            ElementProps::Door(p) => p,
            _ => return None,
        };

        let radius = self.footprint.width;
        let hinge_local = match props.hinge {
            HingeSide::Left => self.position,
            HingeSide::Right => Point::new(self.position.x + self.footprint.width, self.position.y),
        };

        // Start along the closed leaf, sweep 90 degrees into (or away from)
        // the room. Plan y grows southward, so "inward" sweeps toward +y.
        let (start_deg, sweep_deg) = match (props.hinge, props.swing) {
            (HingeSide::Left, SwingDirection::Inward) => (0.0, 90.0),
            (HingeSide::Left, SwingDirection::Outward) => (0.0, -90.0),
            (HingeSide::Right, SwingDirection::Inward) => (180.0, -90.0),
            (HingeSide::Right, SwingDirection::Outward) => (180.0, 90.0),
        };

        let center = self.center();
        let mut points = Vec::with_capacity(SWING_ARC_SEGMENTS + 1);
        for i in 0..=SWING_ARC_SEGMENTS {
            let t = i as f64 / SWING_ARC_SEGMENTS as f64;
            let angle = (start_deg + sweep_deg * t).to_radians();
            let p = Point::new(
                hinge_local.x + radius * angle.cos(),
                hinge_local.y + radius * angle.sin(),
            );
            points.push(rotate_point(p, center, self.rotation));
        }
        Some(points)
    }
}
