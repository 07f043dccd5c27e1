//! Scene graph for the showcase: camera, phone node and model bounds.

/// Perspective camera and its screen-space helpers.
pub mod camera;
pub mod model;
mod phone;

pub use camera::Camera;
pub use model::{Aabb, PhoneModel};
pub use phone::PhoneNode;

use crate::options::CameraOptions;

/// Camera plus the phone node, sized to a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Scene camera.
    pub camera: Camera,
    /// The phone.
    pub phone: PhoneNode,
    viewport: (f32, f32),
}

impl Scene {
    /// New scene for a `width` x `height` pixel viewport.
    #[must_use]
    pub fn new(options: &CameraOptions, width: f32, height: f32) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self {
            camera: Camera::from_options(options, aspect),
            phone: PhoneNode::new(),
            viewport: (width, height),
        }
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.camera.resize(width, height);
    }

    /// Pixels per world unit on the phone's plane for the current viewport.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f32 {
        self.camera.pixels_per_unit(self.viewport.1)
    }
}
