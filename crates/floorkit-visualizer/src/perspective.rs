//! Perspective projection adapter.
//!
//! A free orbit view of the scene: drag orbits, wheel dollies, pan slides
//! the target. Distance stays inside the camera's configured range.

use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::scene::{scene_bounds, SceneBox};

/// Sensitivity of pointer-drag orbiting, radians per pixel.
const ORBIT_SENSITIVITY: f32 = 0.01;

/// Dolly step per wheel notch, world meters.
const ZOOM_STEP: f32 = 2.0;

/// Orbitable perspective view over a scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerspectiveView {
    camera: Camera,
}

impl PerspectiveView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        self.camera.update_aspect_ratio(width, height);
    }

    /// Pointer drag in view pixels.
    pub fn orbit_drag(&mut self, delta_x: f32, delta_y: f32) {
        self.camera
            .orbit(-delta_x * ORBIT_SENSITIVITY, delta_y * ORBIT_SENSITIVITY);
    }

    /// Wheel dolly; positive notches move toward the target. Returns the
    /// applied distance.
    pub fn dolly(&mut self, notches: f32) -> f32 {
        self.camera.zoom(notches * ZOOM_STEP)
    }

    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.camera.pan(delta_x, delta_y);
    }

    /// Frames the scene bounds.
    pub fn frame_scene(&mut self, scene: &[SceneBox]) {
        if let Some((min, max)) = scene_bounds(scene) {
            self.camera.fit_to_bounds(min, max);
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.perspective_matrix() * self.camera.view_matrix()
    }

    /// Projects a world point to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorkit_core::constants::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};

    #[test]
    fn test_dolly_respects_distance_range() {
        let mut view = PerspectiveView::new();
        for _ in 0..1000 {
            view.dolly(1.0);
        }
        assert_eq!(view.camera().distance, MIN_CAMERA_DISTANCE as f32);
        for _ in 0..1000 {
            view.dolly(-1.0);
        }
        assert_eq!(view.camera().distance, MAX_CAMERA_DISTANCE as f32);
    }

    #[test]
    fn test_orbit_changes_eye_not_target() {
        let mut view = PerspectiveView::new();
        let target = view.camera().target;
        let eye_before = view.camera().eye_position();

        view.orbit_drag(40.0, 15.0);

        assert_eq!(view.camera().target, target);
        assert_ne!(view.camera().eye_position(), eye_before);
    }

    #[test]
    fn test_depth_foreshortens() {
        // Perspective projection: the same world offset shrinks on screen
        // as it moves away from the eye.
        let mut view = PerspectiveView::new();
        view.camera.set_view(0.0, 0.0);

        let offset = Vec3::new(0.0, 1.0, 0.0);
        let near_base = Vec3::new(-5.0, 0.0, 0.0);
        let far_base = Vec3::new(-15.0, 0.0, 0.0);
        let near = (view.project(near_base + offset) - view.project(near_base)).length();
        let far = (view.project(far_base + offset) - view.project(far_base)).length();
        assert!(near > far);
    }
}
