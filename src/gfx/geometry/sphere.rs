//! UV sphere with a duplicated seam column for texturing.

use cgmath::Vector3;

use super::ellipsoid::{latitude, surface_normal, surface_point};
use super::grid::{grid_triangles, SeamSample};
use super::{finish, indexable_vertex_count, rejected, require_count, require_length, Tessellate};
use crate::error::Result;
use crate::gfx::color::Color;
use crate::gfx::mesh::{Mesh, Vertex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    /// Latitude rings, pole to pole inclusive
    pub stacks: u32,
    /// Longitude lines, including the seam column that repeats the first
    pub slices: u32,
    pub color: Color,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            stacks: 18,
            slices: 36,
            color: Color::BLUE,
        }
    }
}

impl SphereConfig {
    pub const MIN_STACKS: u32 = 3;
    /// Three distinct longitudes plus the seam column
    pub const MIN_SLICES: u32 = 4;

    pub fn new(radius: f32, stacks: u32, slices: u32) -> Self {
        Self {
            radius,
            stacks,
            slices,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_count("stacks", self.stacks, Self::MIN_STACKS)?;
        require_count("slices", self.slices, Self::MIN_SLICES)?;
        require_length("radius", self.radius)?;
        self.color.validate()
    }
}

impl Tessellate for SphereConfig {
    fn tessellate(&self) -> Result<Mesh> {
        generate_sphere(self)
    }

    fn name(&self) -> &'static str {
        "sphere"
    }
}

/// Generates a `stacks x slices` sphere with texture coordinates.
///
/// The last column sits on top of the first (longitude 0) while its U
/// coordinate is 1.0, so a wrapped texture meets itself without a seam.
/// V runs from 0 at the south pole to 1 at the north pole. Triangulation is
/// the same as the ellipsoid's, including the index wrap from the last column
/// to the first, whose quads have zero area.
pub fn generate_sphere(config: &SphereConfig) -> Result<Mesh> {
    config.validate().map_err(|e| rejected("sphere", e))?;

    let (stacks, slices) = (config.stacks, config.slices);
    let vertex_count = indexable_vertex_count(u64::from(stacks) * u64::from(slices))?;
    let radii = Vector3::new(config.radius, config.radius, config.radius);
    let color: [f32; 3] = config.color.into();

    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..stacks {
        let phi = latitude(i, stacks);
        let v = i as f32 / (stacks - 1) as f32;
        for j in 0..slices {
            let longitude = SeamSample::at(j, slices);
            vertices.push(Vertex::with_uv(
                surface_point(radii, phi, longitude.angle),
                surface_normal(radii, phi, longitude.angle),
                color,
                [longitude.uv, v],
            ));
        }
    }

    let triangles = grid_triangles(stacks, slices);

    Ok(finish("sphere", vertices, triangles))
}
