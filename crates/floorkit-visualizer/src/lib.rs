//! # Floorkit Visualizer
//!
//! 3D presentation of a floor plan: scene construction from plan elements
//! (meters, Z-up) and the isometric and perspective projection adapters
//! that turn the scene into view-projection transforms for a host
//! renderer. The scene derives entirely from the editor's element state,
//! so the plan and 3D views cannot drift apart.

pub mod camera;
pub mod isometric;
pub mod perspective;
pub mod scene;

pub use camera::Camera;
pub use isometric::IsometricView;
pub use perspective::PerspectiveView;
pub use scene::{build_scene, scene_bounds, BoxClass, SceneBox};
