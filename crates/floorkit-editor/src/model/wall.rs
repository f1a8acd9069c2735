//! Wall properties.

use serde::{Deserialize, Serialize};

use floorkit_core::units::editor_px_to_mm;
use floorkit_core::Result;

use super::{not_applicable, px, require_positive, ElementKind, Footprint, PropertyKey};

/// Wall construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallMaterial {
    Stud,
    Brick,
    Concrete,
}

/// Millimeter properties of a wall. The plan footprint maps thickness to
/// footprint width and run length to footprint height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallProps {
    pub thickness_mm: f64,
    pub length_mm: f64,
    pub height_mm: f64,
    pub material: WallMaterial,
}

impl Default for WallProps {
    fn default() -> Self {
        Self {
            thickness_mm: 200.0,
            length_mm: 1000.0,
            height_mm: 2400.0,
            material: WallMaterial::Stud,
        }
    }
}

impl WallProps {
    pub(crate) fn footprint(&self) -> Footprint {
        Footprint::new(px(self.thickness_mm), px(self.length_mm))
    }

    pub(crate) fn update(
        &mut self,
        key: PropertyKey,
        value_mm: f64,
        kind: ElementKind,
    ) -> Result<Footprint> {
        match key {
            PropertyKey::Thickness => {
                require_positive(key, value_mm)?;
                self.thickness_mm = value_mm;
            }
            PropertyKey::Length => {
                require_positive(key, value_mm)?;
                self.length_mm = value_mm;
            }
            PropertyKey::Height => {
                require_positive(key, value_mm)?;
                self.height_mm = value_mm;
            }
            PropertyKey::Width
            | PropertyKey::Depth
            | PropertyKey::HeightFrom
            | PropertyKey::HeightTo => return Err(not_applicable(key, kind)),
        }
        Ok(self.footprint())
    }

    pub(crate) fn absorb_footprint(&mut self, width_px: f64, height_px: f64) {
        self.thickness_mm = editor_px_to_mm(width_px);
        self.length_mm = editor_px_to_mm(height_px);
    }
}
