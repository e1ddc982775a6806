//! # Solidgen Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use solidgen::prelude::*;
//!
//! fn build() -> Result<Vec<Mesh>, GeometryError> {
//!     let shapes: [Shape; 2] = [
//!         SphereConfig::new(3.0, 18, 36).into(),
//!         TorusConfig::default().with_color(Color::SILVER).into(),
//!     ];
//!     shapes.iter().map(|shape| shape.tessellate()).collect()
//! }
//!
//! assert_eq!(build().unwrap().len(), 2);
//! ```

pub use crate::error::GeometryError;
pub use crate::gfx::color::Color;
pub use crate::gfx::geometry::{
    generate_cube, generate_cylinder, generate_ellipsoid, generate_sphere, generate_torus,
    CubeConfig, CylinderConfig, EllipsoidConfig, SeamSample, Shape, SphereConfig, Tessellate,
    TorusConfig,
};
pub use crate::gfx::mesh::{Bounds, DrawMesh, GpuMesh, Mesh, Vertex};
