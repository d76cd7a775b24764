use crate::config::CameraConfig;
use glam::{Mat4, Vec3};

/// Perspective camera aimed at a target point.
///
/// The view-projection matrix is recomputed from the fields on demand, so
/// mutating `aspect` on resize takes effect on the next frame without a
/// separate "update projection" call.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: config.position,
            target: config.look_at,
            fovy: config.fovy,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Re-aim the camera at a point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Recompute the aspect ratio from surface dimensions.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_config() {
        let cam = OrbitCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 10.0, 20.0));
        assert_eq!(cam.target, Vec3::ZERO);
        let vp = cam.view_projection();
        // Should produce a valid matrix (no NaN)
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn set_aspect_from_dimensions() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn set_aspect_survives_zero_height() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(800, 0);
        assert!(cam.aspect.is_finite());
    }

    #[test]
    fn look_at_retargets() {
        let mut cam = OrbitCamera::default();
        cam.look_at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.target, Vec3::new(1.0, 2.0, 3.0));
    }
}
