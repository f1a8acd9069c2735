//! Orbit camera shared by the 3D projections.

use glam::{Mat4, Vec3};

use floorkit_core::constants::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};

/// An orbit camera around a target point, Z-up.
///
/// `yaw`/`pitch` are radians; distance stays inside the configured range,
/// out-of-range zoom requests clamp silently.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32, // degrees
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 20.0,
            yaw: -45.0f32.to_radians(),
            pitch: 45.0f32.to_radians(),
            fov: 45.0,
            aspect_ratio: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance: distance.clamp(MIN_CAMERA_DISTANCE as f32, MAX_CAMERA_DISTANCE as f32),
            ..Default::default()
        }
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Keep away from the poles to avoid flipping.
        let limit = 89.0f32.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Dolly toward (positive delta) or away from the target. Returns the
    /// distance actually applied.
    pub fn zoom(&mut self, delta: f32) -> f32 {
        self.distance = (self.distance - delta)
            .clamp(MIN_CAMERA_DISTANCE as f32, MAX_CAMERA_DISTANCE as f32);
        self.distance
    }

    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let offset_dir = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch).normalize();
        let forward = -offset_dir;

        let world_up = if forward.cross(Vec3::Z).length_squared() < 0.001 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let cam_right = forward.cross(world_up).normalize();
        let cam_up = cam_right.cross(forward).normalize();

        let scale = self.distance * 0.001;
        self.target -= cam_right * delta_x * scale;
        self.target += cam_up * delta_y * scale;
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let offset = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch) * self.distance;
        self.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        let forward = (self.target - eye).normalize();
        let up = if forward.cross(Vec3::Z).length_squared() < 0.001 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        Mat4::look_at_rh(eye, self.target, up)
    }

    pub fn set_view(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg.to_radians();
        self.pitch = pitch_deg.to_radians();
    }

    /// Standard isometric orientation.
    pub fn set_isometric(&mut self) {
        self.yaw = -45.0f32.to_radians();
        self.pitch = 35.264f32.to_radians();
    }

    pub fn perspective_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Orthographic projection sized so `half_extent` world units fit
    /// vertically.
    pub fn orthographic_matrix(&self, half_extent: f32) -> Mat4 {
        let half_w = half_extent * self.aspect_ratio;
        Mat4::orthographic_rh(-half_w, half_w, -half_extent, half_extent, self.near, self.far)
    }

    /// Frames the given bounds: targets their center and backs off far
    /// enough to see the largest dimension, within the distance range.
    pub fn fit_to_bounds(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let max_dim = (max - min).max_element();

        self.target = center;

        let fov_rad = self.fov.to_radians();
        let distance = (max_dim * 1.2) / (fov_rad / 2.0).tan();
        self.distance =
            distance.clamp(MIN_CAMERA_DISTANCE as f32, MAX_CAMERA_DISTANCE as f32);
    }
}
