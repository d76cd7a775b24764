use crate::config::SceneConfig;
use crate::rng::SplitMix64;
use glam::Vec3;

/// One cube in the field. Edge, color, and position are assigned once at
/// generation; only `rotation_y` mutates afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Edge length of the cube.
    pub edge: f32,
    /// RGB color, each component in `[0, 1)`.
    pub color: Vec3,
    /// Position of the cube center in world space.
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians.
    pub rotation_y: f32,
}

/// The fixed-count collection of cubes owned by the scene.
///
/// Cubes are never added or removed after generation; iteration order is the
/// generation order.
#[derive(Debug, Clone)]
pub struct CubeField {
    cubes: Vec<Cube>,
}

impl CubeField {
    /// Generate the field from a seeded generator. Per cube, the draws are:
    /// color r/g/b, edge length, then position x/y/z.
    pub fn generate(config: &SceneConfig, rng: &mut SplitMix64) -> Self {
        let mut cubes = Vec::with_capacity(config.cube_count);
        for _ in 0..config.cube_count {
            let color = Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32());
            let edge = rng.next_f32() * config.edge_span + config.edge_min;
            let position = Vec3::new(
                (rng.next_f32() * 2.0 - 1.0) * config.spread,
                (rng.next_f32() * 2.0 - 1.0) * config.spread,
                (rng.next_f32() * 2.0 - 1.0) * config.spread,
            );
            cubes.push(Cube {
                edge,
                color,
                position,
                rotation_y: 0.0,
            });
        }
        Self { cubes }
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// Advance every cube's Y rotation by `step` radians.
    pub fn spin(&mut self, step: f32) {
        for cube in &mut self.cubes {
            cube.rotation_y += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> CubeField {
        CubeField::generate(&SceneConfig::default(), &mut SplitMix64::new(seed))
    }

    #[test]
    fn generates_exactly_150_cubes() {
        assert_eq!(field(42).len(), 150);
    }

    #[test]
    fn attributes_stay_in_bounds() {
        for seed in [0, 1, 42, 0xdead_beef] {
            for cube in field(seed).iter() {
                assert!((0.1..0.6).contains(&cube.edge), "edge {}", cube.edge);
                for c in [cube.color.x, cube.color.y, cube.color.z] {
                    assert!((0.0..1.0).contains(&c), "color component {c}");
                }
                for p in [cube.position.x, cube.position.y, cube.position.z] {
                    assert!((-10.0..10.0).contains(&p), "position coord {p}");
                }
            }
        }
    }

    #[test]
    fn rotation_starts_at_zero() {
        assert!(field(3).iter().all(|c| c.rotation_y == 0.0));
    }

    #[test]
    fn same_seed_same_field() {
        let a = field(99);
        let b = field(99);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn spin_advances_every_cube_uniformly() {
        let mut f = field(5);
        f.spin(0.05);
        f.spin(0.05);
        for cube in f.iter() {
            assert!((cube.rotation_y - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn spin_leaves_placement_untouched() {
        let mut f = field(11);
        let before: Vec<_> = f.iter().map(|c| (c.edge, c.color, c.position)).collect();
        f.spin(0.05);
        let after: Vec<_> = f.iter().map(|c| (c.edge, c.color, c.position)).collect();
        assert_eq!(before, after);
    }
}
