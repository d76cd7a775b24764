use cubefield_scene::OrbitCamera;
use glam::Vec3;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Orbit-style camera controls: left-drag rotates around the target,
/// scroll zooms.
///
/// Pointer input is buffered between frames and applied by a single
/// `update` call, which rewrites the camera position from the controller's
/// own yaw/pitch/distance. The per-frame camera orbit overrides the x/z
/// part of that position afterwards; zoom remains visible through the
/// camera height and the next frame's distance.
pub struct OrbitControls {
    yaw: f32,
    pitch: f32,
    distance: f32,

    is_dragging: bool,
    last_mouse_pos: Option<PhysicalPosition<f64>>,
    accumulated_delta: (f32, f32),
    accumulated_scroll: f32,

    sensitivity: f32,
    zoom_speed: f32,
    min_distance: f32,
}

impl OrbitControls {
    /// Derive the initial orbit parameters from the camera's starting pose.
    pub fn new(camera: &OrbitCamera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            is_dragging: false,
            last_mouse_pos: None,
            accumulated_delta: (0.0, 0.0),
            accumulated_scroll: 0.0,
            sensitivity: 0.005,
            zoom_speed: 1.0,
            min_distance: 0.1,
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.is_dragging = state == ElementState::Pressed;
            if !self.is_dragging {
                self.last_mouse_pos = None;
            }
        }
    }

    pub fn handle_mouse_move(&mut self, position: PhysicalPosition<f64>) {
        if self.is_dragging {
            if let Some(last) = self.last_mouse_pos {
                self.accumulated_delta.0 += (position.x - last.x) as f32;
                self.accumulated_delta.1 += (position.y - last.y) as f32;
            }
            self.last_mouse_pos = Some(position);
        }
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / 100.0) as f32,
        };
        self.accumulated_scroll += amount;
    }

    /// Apply buffered pointer input to the camera. Call once per frame.
    pub fn update(&mut self, camera: &mut OrbitCamera) {
        self.distance = (self.distance - self.accumulated_scroll * self.zoom_speed)
            .max(self.min_distance);
        self.accumulated_scroll = 0.0;

        let (dx, dy) = self.accumulated_delta;
        self.accumulated_delta = (0.0, 0.0);
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());

        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        ) * self.distance;
        camera.position = camera.target + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::default()
    }

    #[test]
    fn derives_pose_from_camera() {
        let cam = camera();
        let controls = OrbitControls::new(&cam);
        assert!((controls.distance - 500.0_f32.sqrt()).abs() < 1e-4);
        assert!((controls.yaw - 0.0).abs() < 1e-6);
    }

    #[test]
    fn update_without_input_keeps_position() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        let before = cam.position;
        controls.update(&mut cam);
        assert!((cam.position - before).length() < 1e-4);
    }

    #[test]
    fn drag_rotates_on_next_update() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.handle_mouse_button(MouseButton::Left, ElementState::Pressed);
        controls.handle_mouse_move(PhysicalPosition::new(100.0, 100.0));
        controls.handle_mouse_move(PhysicalPosition::new(180.0, 100.0));
        let before = cam.position;
        controls.update(&mut cam);
        assert!((cam.position - before).length() > 1e-3);
        // Rotation preserves the orbit distance
        assert!((cam.position.length() - 500.0_f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn buffered_input_is_consumed_by_one_update() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.handle_mouse_button(MouseButton::Left, ElementState::Pressed);
        controls.handle_mouse_move(PhysicalPosition::new(0.0, 0.0));
        controls.handle_mouse_move(PhysicalPosition::new(50.0, 30.0));
        controls.update(&mut cam);
        let after_first = cam.position;
        controls.update(&mut cam);
        assert!((cam.position - after_first).length() < 1e-5);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.handle_mouse_move(PhysicalPosition::new(10.0, 10.0));
        controls.handle_mouse_move(PhysicalPosition::new(300.0, 300.0));
        let before = cam.position;
        controls.update(&mut cam);
        assert!((cam.position - before).length() < 1e-4);
    }

    #[test]
    fn scroll_zooms_toward_target() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.handle_scroll(MouseScrollDelta::LineDelta(0.0, 3.0));
        controls.update(&mut cam);
        assert!((cam.position - cam.target).length() < 500.0_f32.sqrt());
    }

    #[test]
    fn zoom_is_clamped_at_minimum_distance() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(&cam);
        controls.handle_scroll(MouseScrollDelta::LineDelta(0.0, 10_000.0));
        controls.update(&mut cam);
        assert!((cam.position - cam.target).length() >= 0.1 - 1e-6);
    }
}
