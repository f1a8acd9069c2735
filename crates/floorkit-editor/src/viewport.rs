//! Plan viewport and coordinate transformation.
//!
//! Handles conversion between view coordinates (the surface the pointer
//! events arrive in) and world coordinates (the plan's editor-pixel space).
//! Both spaces share the top-left origin, so no axis flip is involved:
//!
//! ```text
//! view_x  = world_x * scale + pan_x
//! world_x = (view_x - pan_x) / scale
//! ```
//!
//! Out-of-range zoom requests are clamped, never rejected.

use floorkit_core::constants::{MAX_ZOOM, MIN_ZOOM, VIEW_PADDING};
use floorkit_core::Point;

/// Plan viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct PlanViewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl PlanViewport {
    /// Creates a viewport at native zoom with the given surface size.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Updates the surface size (window resize).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Sets the zoom level, clamped into [`MIN_ZOOM`], [`MAX_ZOOM`].
    /// Returns the scale actually applied.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        self.scale
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts view coordinates to world (plan editor-pixel) coordinates.
    pub fn view_to_world(&self, view_x: f64, view_y: f64) -> Point {
        Point::new(
            (view_x - self.pan_x) / self.scale,
            (view_y - self.pan_y) / self.scale,
        )
    }

    /// Converts world coordinates to view coordinates.
    pub fn world_to_view(&self, world_x: f64, world_y: f64) -> Point {
        Point::new(
            world_x * self.scale + self.pan_x,
            world_y * self.scale + self.pan_y,
        )
    }

    /// Whether a view-space point lies on the surface; pointer-ups outside
    /// it abort in-flight drags and placements.
    pub fn contains_view_point(&self, view_x: f64, view_y: f64) -> bool {
        view_x >= 0.0 && view_x <= self.canvas_width && view_y >= 0.0 && view_y <= self.canvas_height
    }

    /// Rescales about a view-space anchor so the world position under the
    /// anchor stays fixed (zoom-to-cursor). Returns the applied scale.
    pub fn zoom_about(&mut self, view_x: f64, view_y: f64, new_scale: f64) -> f64 {
        let anchor = self.view_to_world(view_x, view_y);
        let applied = self.set_scale(new_scale);
        self.pan_x = view_x - anchor.x * applied;
        self.pan_y = view_y - anchor.y * applied;
        applied
    }

    /// Fits the given world bounds into the viewport, reserving
    /// [`VIEW_PADDING`] of the surface per edge.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }
        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - VIEW_PADDING * 2.0;
        let scale_x = self.canvas_width * padding_factor / width;
        let scale_y = self.canvas_height * padding_factor / height;
        let applied = self.set_scale(scale_x.min(scale_y));

        self.pan_x = (self.canvas_width - width * applied) / 2.0 - min_x * applied;
        self.pan_y = (self.canvas_height - height * applied) / 2.0 - min_y * applied;
    }

    /// Resets to native zoom with no pan.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl Default for PlanViewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
