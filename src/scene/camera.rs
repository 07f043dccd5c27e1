use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, options.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio after a viewport resize. Degenerate sizes
    /// are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Distance from the eye to the target plane.
    #[must_use]
    pub fn focus_distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Screen pixels covered by one world unit on the target plane, for a
    /// viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn pixels_per_unit(&self, viewport_height: f32) -> f32 {
        let visible_height =
            2.0 * self.focus_distance() * (self.fovy.to_radians() / 2.0).tan();
        if visible_height > 0.0 {
            viewport_height / visible_height
        } else {
            0.0
        }
    }

    /// CSS `perspective` distance in pixels that reproduces this camera's
    /// field of view for a viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn css_perspective(&self, viewport_height: f32) -> f32 {
        self.focus_distance() * self.pixels_per_unit(viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }

    #[test]
    fn default_camera_sits_at_ten_units() {
        let cam = camera();
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(cam.focus_distance(), 10.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let clip = camera().build_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn pixels_per_unit_matches_projection() {
        let cam = camera();
        let ppu = cam.pixels_per_unit(1000.0);
        // A point one unit up should land ppu pixels above center.
        let clip = cam.build_matrix() * glam::Vec4::new(0.0, 1.0, 0.0, 1.0);
        let ndc_y = clip.y / clip.w;
        let pixels = ndc_y * 1000.0 / 2.0;
        assert!((pixels - ppu).abs() < 1e-2, "{pixels} vs {ppu}");
    }

    #[test]
    fn resize_ignores_degenerate_sizes() {
        let mut cam = camera();
        cam.resize(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(800.0, 0.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
