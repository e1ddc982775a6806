//! # Procedural Geometry Generation
//!
//! Generates indexed meshes for common solids from a handful of parameters,
//! with analytic normals and seam-free texture coordinates where the shape
//! has a UV mapping.
//!
//! ## Supported Primitives
//!
//! - **Cube**: box with per-face normals and UVs
//! - **Cylinder**: capped cylinder, cap and side rims kept as separate vertices
//! - **Ellipsoid**: three independent radii, gradient normals
//! - **Sphere**: UV sphere with a duplicated seam column
//! - **Torus**: tube swept around a circle, seam-stitched in both directions
//!
//! ## Usage
//!
//! ```rust
//! use solidgen::gfx::geometry::{generate_sphere, Shape, SphereConfig, Tessellate, TorusConfig};
//!
//! let sphere = generate_sphere(&SphereConfig::new(1.0, 18, 36)).unwrap();
//! assert_eq!(sphere.vertex_count(), 18 * 36);
//!
//! let torus = Shape::from(TorusConfig::default()).tessellate().unwrap();
//! assert_eq!(torus.vertex_count(), 36 * 36);
//! ```

pub mod cube;
pub mod cylinder;
pub mod ellipsoid;
pub mod grid;
pub mod sphere;
pub mod torus;

#[cfg(test)]
pub(crate) mod test_support;

pub use cube::{generate_cube, CubeConfig};
pub use cylinder::{generate_cylinder, CylinderConfig};
pub use ellipsoid::{generate_ellipsoid, EllipsoidConfig};
pub use grid::SeamSample;
pub use sphere::{generate_sphere, SphereConfig};
pub use torus::{generate_torus, TorusConfig};

use crate::error::{GeometryError, Result};
use crate::gfx::mesh::{Mesh, Vertex};

/// Anything that can produce a [`Mesh`]
pub trait Tessellate {
    /// Builds a brand new mesh. Calling it twice yields two equal meshes.
    fn tessellate(&self) -> Result<Mesh>;

    /// Short lowercase name used in logs
    fn name(&self) -> &'static str;
}

/// Closed set of supported solids
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube(CubeConfig),
    Cylinder(CylinderConfig),
    Ellipsoid(EllipsoidConfig),
    Sphere(SphereConfig),
    Torus(TorusConfig),
}

impl Tessellate for Shape {
    fn tessellate(&self) -> Result<Mesh> {
        match self {
            Shape::Cube(config) => config.tessellate(),
            Shape::Cylinder(config) => config.tessellate(),
            Shape::Ellipsoid(config) => config.tessellate(),
            Shape::Sphere(config) => config.tessellate(),
            Shape::Torus(config) => config.tessellate(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Cube(config) => config.name(),
            Shape::Cylinder(config) => config.name(),
            Shape::Ellipsoid(config) => config.name(),
            Shape::Sphere(config) => config.name(),
            Shape::Torus(config) => config.name(),
        }
    }
}

macro_rules! shape_from_config {
    ($($variant:ident => $config:ty),* $(,)?) => {
        $(
            impl From<$config> for Shape {
                fn from(config: $config) -> Self {
                    Shape::$variant(config)
                }
            }
        )*
    };
}

shape_from_config! {
    Cube => CubeConfig,
    Cylinder => CylinderConfig,
    Ellipsoid => EllipsoidConfig,
    Sphere => SphereConfig,
    Torus => TorusConfig,
}

pub(crate) fn require_count(name: &'static str, value: u32, minimum: u32) -> Result<()> {
    if value < minimum {
        return Err(GeometryError::InvalidParameter {
            name,
            value,
            minimum,
        });
    }
    Ok(())
}

pub(crate) fn require_length(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::DegenerateGeometry { name, value });
    }
    Ok(())
}

/// Vertex count of a grid, rejected if a `u32` index could not reach every vertex
pub(crate) fn indexable_vertex_count(requested: u64) -> Result<usize> {
    if requested > u64::from(u32::MAX) {
        return Err(GeometryError::TooManyVertices { requested });
    }
    Ok(requested as usize)
}

/// Logs and passes through a rejected configuration
pub(crate) fn rejected(shape: &str, err: GeometryError) -> GeometryError {
    log::warn!("rejected {} configuration: {}", shape, err);
    err
}

/// Wraps finished buffers into a mesh and reports its size
pub(crate) fn finish(shape: &str, vertices: Vec<Vertex>, triangles: Vec<[u32; 3]>) -> Mesh {
    log::debug!(
        "generated {}: {} vertices, {} triangles",
        shape,
        vertices.len(),
        triangles.len()
    );
    Mesh::from_parts(vertices, triangles)
}
