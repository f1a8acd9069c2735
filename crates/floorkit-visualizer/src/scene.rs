//! 3D scene construction.
//!
//! Derives an axis-aligned-box scene from the plan elements. The scene is
//! world-space geometry in meters with a Z-up convention; the cameras in
//! [`crate::isometric`] and [`crate::perspective`] decide how it lands on
//! screen. Selection sets a highlight flag on the affected boxes and
//! nothing else, so both projections always agree with the plan about
//! geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use floorkit_core::constants::DEFAULT_ROOM_SPAN_MM;
use floorkit_core::units::{editor_px_to_mm, mm_to_meters};
use floorkit_editor::{Element, ElementId, ElementProps};

/// What a scene box depicts; drives material choice in the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxClass {
    Wall,
    Door,
    WindowGlazing,
    WindowFrame,
}

/// One axis-aligned box before yaw, in meters, Z-up, centered at `center`.
/// `yaw_deg` rotates it about the vertical axis through its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBox {
    pub center: Vec3,
    pub size: Vec3,
    pub yaw_deg: f32,
    pub class: BoxClass,
    pub selected: bool,
}

fn px_to_m(px: f64) -> f32 {
    mm_to_meters(editor_px_to_mm(px)) as f32
}

fn mm_to_m(mm: f64) -> f32 {
    mm_to_meters(mm) as f32
}

/// Builds the scene for one floor's elements.
///
/// Plan coordinates are re-centered so a default-span room sits around the
/// world origin, which keeps orbit targets sensible without fitting.
pub fn build_scene(elements: &[Element], selected: Option<ElementId>) -> Vec<SceneBox> {
    let recenter = mm_to_m(DEFAULT_ROOM_SPAN_MM) / 2.0;
    let mut boxes = Vec::with_capacity(elements.len());

    for element in elements {
        let is_selected = selected == Some(element.id);
        let plan_center = element.center();
        let cx = px_to_m(plan_center.x) - recenter;
        let cy = px_to_m(plan_center.y) - recenter;
        let sx = px_to_m(element.footprint.width);
        let sy = px_to_m(element.footprint.height);
        let yaw = element.rotation as f32;

        let mut push = |class, z_base_m: f32, z_size_m: f32| {
            boxes.push(SceneBox {
                center: Vec3::new(cx, cy, z_base_m + z_size_m / 2.0),
                size: Vec3::new(sx, sy, z_size_m),
                yaw_deg: yaw,
                class,
                selected: is_selected,
            });
        };

        match &element.props {
            ElementProps::Wall(p) => {
                push(BoxClass::Wall, 0.0, mm_to_m(p.height_mm));
            }
            ElementProps::Door(p) => {
                push(BoxClass::Door, 0.0, mm_to_m(p.height_mm));
            }
            ElementProps::Window(p) => {
                let sill = mm_to_m(p.height_from_mm);
                let head = mm_to_m(p.height_to_mm);
                let frame = mm_to_m(p.frame_mm);

                push(BoxClass::WindowFrame, sill, frame);
                push(BoxClass::WindowFrame, head - frame, frame);
                let glazing = head - sill - 2.0 * frame;
                if glazing > 0.0 {
                    push(BoxClass::WindowGlazing, sill + frame, glazing);
                } else {
                    debug!(
                        target: "floorkit",
                        element_id = %element.id,
                        "window frame rails consume the full opening, no glazing box"
                    );
                }
            }
        }
    }

    boxes
}

/// Axis-aligned bounds of the scene, ignoring yaw. `None` for an empty
/// scene.
pub fn scene_bounds(boxes: &[SceneBox]) -> Option<(Vec3, Vec3)> {
    let mut iter = boxes.iter();
    let first = iter.next()?;
    let mut min = first.center - first.size / 2.0;
    let mut max = first.center + first.size / 2.0;
    for b in iter {
        min = min.min(b.center - b.size / 2.0);
        max = max.max(b.center + b.size / 2.0);
    }
    Some((min, max))
}
