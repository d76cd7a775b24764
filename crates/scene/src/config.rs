use glam::Vec3;

/// Perspective camera parameters. Immutable after construction except
/// aspect, which the app recomputes on window resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in radians.
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 50.0,
            position: Vec3::new(0.0, 10.0, 20.0),
            look_at: Vec3::ZERO,
        }
    }
}

/// Render surface parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Clear color as linear RGB.
    pub clear_color: [f64; 3],
    pub width: u32,
    pub height: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0],
            width: 1280,
            height: 720,
        }
    }
}

/// Directional light: the direction is defined by a position shining
/// toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLightConfig {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            position: Vec3::ONE,
        }
    }
}

impl DirectionalLightConfig {
    /// Unit vector from the origin toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize()
    }
}

/// Ambient light applied uniformly to every surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLightConfig {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 0.5,
        }
    }
}

/// The scene's two lights, created once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightingConfig {
    pub directional: DirectionalLightConfig,
    pub ambient: AmbientLightConfig,
}

/// Scene generation and animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Number of cubes generated at startup. Fixed for the process lifetime.
    pub cube_count: usize,
    /// Half-extent of the bounded region cube positions are drawn from.
    pub spread: f32,
    /// Lower bound of the random edge length.
    pub edge_min: f32,
    /// Width of the random edge length interval.
    pub edge_span: f32,
    /// Rotation advance per frame while spin is held, in radians.
    pub spin_step: f32,
    /// Radius of the camera's circular orbit.
    pub orbit_radius: f32,
    /// Angular rate of the orbit in radians per millisecond.
    pub orbit_rate: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_count: 150,
            spread: 10.0,
            edge_min: 0.1,
            edge_span: 0.5,
            spin_step: 0.05,
            orbit_radius: 20.0,
            orbit_rate: 0.0005,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults() {
        let cam = CameraConfig::default();
        assert_eq!(cam.position, Vec3::new(0.0, 10.0, 20.0));
        assert_eq!(cam.look_at, Vec3::ZERO);
        assert!((cam.fovy - 60.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.far, 50.0);
    }

    #[test]
    fn directional_light_direction_is_unit() {
        let light = DirectionalLightConfig::default();
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lighting_defaults() {
        let lights = LightingConfig::default();
        assert_eq!(lights.directional.color, Vec3::ONE);
        assert_eq!(lights.directional.intensity, 1.0);
        assert_eq!(lights.ambient.intensity, 0.5);
    }

    #[test]
    fn scene_defaults() {
        let scene = SceneConfig::default();
        assert_eq!(scene.cube_count, 150);
        assert_eq!(scene.spin_step, 0.05);
        assert_eq!(scene.orbit_radius, 20.0);
    }
}
