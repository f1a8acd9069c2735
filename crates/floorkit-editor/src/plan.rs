//! Plan-view projection adapter.
//!
//! A pure function from an element snapshot plus view parameters to
//! renderer-agnostic 2D primitives. Selection only restyles strokes; it
//! never changes footprint geometry, so the plan and 3D views can never
//! disagree about where an element is.

use serde::{Deserialize, Serialize};

use floorkit_core::{Color, Point};

use crate::model::{Element, ElementId, ElementKind};
use crate::viewport::PlanViewport;

const WALL_FILL: Color = Color::rgb(0.78, 0.76, 0.72);
const WALL_STROKE: Color = Color::rgb(0.25, 0.24, 0.22);
const DOOR_FILL: Color = Color::rgb(0.85, 0.72, 0.55);
const DOOR_STROKE: Color = Color::rgb(0.45, 0.32, 0.18);
const WINDOW_FILL: Color = Color::rgba(0.70, 0.85, 0.95, 0.6);
const WINDOW_STROKE: Color = Color::rgb(0.20, 0.45, 0.65);
const SELECTION_STROKE: Color = Color::rgb(0.95, 0.55, 0.10);

const STROKE_WIDTH: f64 = 1.0;
const SELECTED_STROKE_WIDTH: f64 = 2.5;
const HINGE_MARKER_RADIUS: f64 = 3.0;

/// Stroke/fill parameters for one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

/// A renderer-agnostic 2D drawing primitive, in view pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanPrimitive {
    /// Footprint rectangle, rotated about its own center.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation_deg: f64,
        style: PlanStyle,
    },
    /// Open polyline (door swing arc).
    Polyline { points: Vec<Point>, style: PlanStyle },
    /// Single segment (window mullion).
    Segment { a: Point, b: Point, style: PlanStyle },
    /// Point marker (door hinge).
    Marker {
        at: Point,
        radius: f64,
        style: PlanStyle,
    },
}

fn style_for(kind: ElementKind, selected: bool) -> PlanStyle {
    let (stroke, fill) = match kind {
        ElementKind::Wall => (WALL_STROKE, Some(WALL_FILL)),
        ElementKind::Door => (DOOR_STROKE, Some(DOOR_FILL)),
        ElementKind::Window => (WINDOW_STROKE, Some(WINDOW_FILL)),
    };
    if selected {
        PlanStyle {
            stroke: SELECTION_STROKE,
            stroke_width: SELECTED_STROKE_WIDTH,
            fill,
        }
    } else {
        PlanStyle {
            stroke,
            stroke_width: STROKE_WIDTH,
            fill,
        }
    }
}

fn symbol_style(kind: ElementKind, selected: bool) -> PlanStyle {
    PlanStyle {
        fill: None,
        ..style_for(kind, selected)
    }
}

/// Projects elements into plan primitives under the given viewport.
/// Stateless: same snapshot and view parameters, same primitives.
pub fn plan_primitives(
    elements: &[Element],
    viewport: &PlanViewport,
    selected: Option<ElementId>,
) -> Vec<PlanPrimitive> {
    let scale = viewport.scale();
    let mut primitives = Vec::with_capacity(elements.len());

    for element in elements {
        let is_selected = selected == Some(element.id);
        let origin = viewport.world_to_view(element.position.x, element.position.y);

        primitives.push(PlanPrimitive::Rect {
            x: origin.x,
            y: origin.y,
            width: element.footprint.width * scale,
            height: element.footprint.height * scale,
            rotation_deg: element.rotation,
            style: style_for(element.kind, is_selected),
        });

        if let Some(arc) = element.door_swing_arc() {
            let style = symbol_style(ElementKind::Door, is_selected);
            primitives.push(PlanPrimitive::Polyline {
                points: arc
                    .iter()
                    .map(|p| viewport.world_to_view(p.x, p.y))
                    .collect(),
                style,
            });
            if let Some(hinge) = element.door_hinge() {
                primitives.push(PlanPrimitive::Marker {
                    at: viewport.world_to_view(hinge.x, hinge.y),
                    radius: HINGE_MARKER_RADIUS,
                    style,
                });
            }
        }

        if let Some((a, b)) = element.window_mullion() {
            primitives.push(PlanPrimitive::Segment {
                a: viewport.world_to_view(a.x, a.y),
                b: viewport.world_to_view(b.x, b.y),
                style: symbol_style(ElementKind::Window, is_selected),
            });
        }
    }

    primitives
}
