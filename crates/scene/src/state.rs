use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::cube::CubeField;
use crate::rng::SplitMix64;
use glam::Vec3;

/// Mutable scene state advanced once per frame.
///
/// All entities are created in `new`; afterwards the only mutations are the
/// cube Y rotations (while spin is held) and the camera orbit, both applied
/// by `advance`. The spin flag is written by the app's key observers and
/// read here, all on the same thread.
#[derive(Debug, Clone)]
pub struct SceneState {
    config: SceneConfig,
    cubes: CubeField,
    spin_active: bool,
}

impl SceneState {
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);
        let cubes = CubeField::generate(&config, &mut rng);
        tracing::debug!(seed, count = cubes.len(), "cube field generated");
        Self {
            config,
            cubes,
            spin_active: false,
        }
    }

    pub fn cubes(&self) -> &CubeField {
        &self.cubes
    }

    pub fn spin_active(&self) -> bool {
        self.spin_active
    }

    /// Set by the space key observers: true on press, false on release.
    pub fn set_spin_active(&mut self, active: bool) {
        self.spin_active = active;
    }

    /// Advance the scene by one frame at wall-clock time `now_ms`.
    ///
    /// Runs after the orbit controls have applied buffered pointer input:
    /// the cubes spin while the flag is held, then the camera is placed on
    /// its fixed-radius orbit and re-aimed at the origin. The re-aim
    /// intentionally overrides any look-at change the controls made this
    /// frame; zoom still shows through the camera height.
    pub fn advance(&mut self, camera: &mut OrbitCamera, now_ms: f64) {
        if self.spin_active {
            self.cubes.spin(self.config.spin_step);
        }

        let angle = now_ms * self.config.orbit_rate;
        camera.position.x = self.config.orbit_radius * angle.sin() as f32;
        camera.position.z = self.config.orbit_radius * angle.cos() as f32;
        camera.look_at(Vec3::ZERO);
    }
}
