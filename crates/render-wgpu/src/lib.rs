//! wgpu render backend for the cube field viewer.
//!
//! Draws the 150-cube field as a single instanced draw call, lit by one
//! directional and one ambient light, into a 4x MSAA color target resolved
//! to the surface.
//!
//! # Invariants
//! - The renderer never mutates scene state; it reads the cube field and
//!   camera each frame and submits one draw.
//! - Light parameters are fixed at construction.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
