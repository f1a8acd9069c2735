//! Isometric projection adapter.
//!
//! A fixed-orientation orthographic view of the scene. Zoom changes the
//! orthographic extent; orientation never changes, so the output always
//! reads like a technical drawing.

use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::scene::{scene_bounds, SceneBox};

const MIN_HALF_EXTENT: f32 = 1.0;
const MAX_HALF_EXTENT: f32 = 100.0;
const FIT_MARGIN: f32 = 1.15;

/// Fixed isometric view over a scene.
#[derive(Debug, Clone, Copy)]
pub struct IsometricView {
    camera: Camera,
    half_extent: f32,
}

impl Default for IsometricView {
    fn default() -> Self {
        let mut camera = Camera::default();
        camera.set_isometric();
        Self {
            camera,
            half_extent: 8.0,
        }
    }
}

impl IsometricView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        self.camera.update_aspect_ratio(width, height);
    }

    /// Zooms by a multiplicative factor (>1 zooms in), clamped.
    pub fn zoom(&mut self, factor: f32) -> f32 {
        if factor > 0.0 {
            self.half_extent = (self.half_extent / factor).clamp(MIN_HALF_EXTENT, MAX_HALF_EXTENT);
        }
        self.half_extent
    }

    /// Centers the view on the scene and sizes the extent to fit it.
    pub fn frame_scene(&mut self, scene: &[SceneBox]) {
        let Some((min, max)) = scene_bounds(scene) else {
            return;
        };
        self.camera.target = (min + max) * 0.5;
        let radius = (max - min).max_element() / 2.0;
        self.half_extent = (radius * FIT_MARGIN).clamp(MIN_HALF_EXTENT, MAX_HALF_EXTENT);
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.orthographic_matrix(self.half_extent) * self.camera.view_matrix()
    }

    /// Projects a world point to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }
}
