// src/lib.rs
//! Solidgen
//!
//! Procedural solid meshes (cube, cylinder, ellipsoid, sphere, torus) with
//! analytic normals, flat vertex colors and seam-free texture coordinates,
//! laid out as indexed buffers ready for wgpu.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{GeometryError, Result};
pub use gfx::{Color, Mesh, Shape, Tessellate, Vertex};
