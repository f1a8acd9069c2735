//! Engine-wide constants.
//!
//! All lengths in the element model are stored in millimeters; plan-view
//! footprints are stored in editor pixels at native zoom. The constants here
//! fix the mapping between the two and the quantization the editor applies
//! when committing a position.

/// Editor pixels per millimeter at native zoom (1 mm -> 0.1 px).
pub const EDITOR_PX_PER_MM: f64 = 0.1;

/// One architectural module in millimeters. Positions and dimensions kept in
/// mm snap onto this grid.
pub const GRID_SIZE_MM: f64 = 900.0;

/// Snap grid for plan-view pixel positions at native zoom.
pub const GRID_SIZE_PX: f64 = 45.0;

/// Plan viewport scale clamp.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

/// Orbit-camera distance clamp, in scene units (meters).
pub const MIN_CAMERA_DISTANCE: f64 = 10.0;
pub const MAX_CAMERA_DISTANCE: f64 = 300.0;

/// Assumed room span in millimeters. The 3D adapters re-center the plan
/// origin (northwest corner) to the middle of this span.
pub const DEFAULT_ROOM_SPAN_MM: f64 = 9000.0;

/// Fraction of the viewport reserved as padding by fit-to-bounds.
pub const VIEW_PADDING: f64 = 0.05;

/// Segment count used when flattening a door swing arc into a polyline.
pub const SWING_ARC_SEGMENTS: usize = 16;
