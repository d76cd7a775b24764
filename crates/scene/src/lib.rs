//! Scene model for the cube field viewer.
//!
//! Owns everything the renderer reads: the fixed-count cube field, the
//! perspective orbit camera, the lighting parameters, and the per-frame
//! update step. Nothing in this crate touches the GPU or the window system,
//! so the full update contract is unit-testable.
//!
//! # Invariants
//! - The cube field has fixed cardinality for the process lifetime.
//! - Each cube's edge, color, and position are assigned once at generation;
//!   only the Y rotation mutates, and only while spin is active.
//! - Light configs are created once and never mutated.

mod camera;
mod config;
mod cube;
mod rng;
mod state;

pub use camera::OrbitCamera;
pub use config::{
    AmbientLightConfig, CameraConfig, DirectionalLightConfig, LightingConfig, RendererConfig,
    SceneConfig,
};
pub use cube::{Cube, CubeField};
pub use rng::SplitMix64;
pub use state::SceneState;
