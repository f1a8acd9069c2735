//! Window properties and the plan-view mullion symbol.

use serde::{Deserialize, Serialize};

use floorkit_core::units::editor_px_to_mm;
use floorkit_core::{MutationError, Point, Result};

use super::{
    not_applicable, px, require_positive, rotate_point, Element, ElementKind, ElementProps,
    Footprint, PropertyKey,
};

/// Glazing build-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glazing {
    Single,
    Double,
    Triple,
}

/// Window opening style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStyle {
    Sliding,
    Casement,
    Fixed,
}

/// Millimeter properties of a window. Sill (`height_from_mm`) and head
/// (`height_to_mm`) are measured from the floor plane; `height_to_mm >
/// height_from_mm` holds at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowProps {
    pub width_mm: f64,
    pub depth_mm: f64,
    pub height_from_mm: f64,
    pub height_to_mm: f64,
    pub glazing: Glazing,
    pub style: WindowStyle,
    /// Thickness of the frame rails above and below the glazing.
    pub frame_mm: f64,
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            width_mm: 1800.0,
            depth_mm: 100.0,
            height_from_mm: 0.0,
            height_to_mm: 2000.0,
            glazing: Glazing::Double,
            style: WindowStyle::Sliding,
            frame_mm: 50.0,
        }
    }
}

impl WindowProps {
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
            PropertyKey::HeightFrom => {
                // The sill may rest on the floor, but never below it.
                if value_mm < 0.0 {
                    return Err(MutationError::NonPositiveDimension {
                        key: key.name().into(),
                        value: value_mm,
                    });
                }
                if value_mm >= self.height_to_mm {
                    return Err(MutationError::InvertedHeightRange {
                        height_from: value_mm,
                        height_to: self.height_to_mm,
                    });
                }
                self.height_from_mm = value_mm;
            }
            PropertyKey::HeightTo => {
                require_positive(key, value_mm)?;
                if value_mm <= self.height_from_mm {
                    return Err(MutationError::InvertedHeightRange {
                        height_from: self.height_from_mm,
                        height_to: value_mm,
                    });
                }
                self.height_to_mm = value_mm;
            }
            PropertyKey::Thickness | PropertyKey::Length | PropertyKey::Height => {
                return Err(not_applicable(key, kind))
            }
        }
        Ok(self.footprint())
    }

    pub(crate) fn absorb_footprint(&mut self, width_px: f64, height_px: f64) {
        self.width_mm = editor_px_to_mm(width_px);
        self.depth_mm = editor_px_to_mm(height_px);
    }

    /// Vertical extent of the glazing, head minus sill.
    pub fn glazing_height_mm(&self) -> f64 {
        self.height_to_mm - self.height_from_mm
    }
}

impl Element {
    /// Centerline of the window footprint, the plan-view mullion symbol.
    /// `None` for non-windows.
    pub fn window_mullion(&self) -> Option<(Point, Point)> {
        if !matches!(self.props, ElementProps::Window(_)) {
            return None;
        }
        let mid_y = self.position.y + self.footprint.height / 2.0;
        let a = Point::new(self.position.x, mid_y);
        let b = Point::new(self.position.x + self.footprint.width, mid_y);
        let c = self.center();
        Some((
            rotate_point(a, c, self.rotation),
            rotate_point(b, c, self.rotation),
        ))
    }
}
