//! Ellipsoid with independent radii along X, Y and Z.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use cgmath::{InnerSpace, Vector3};

use super::grid::grid_triangles;
use super::{finish, indexable_vertex_count, rejected, require_count, require_length, Tessellate};
use crate::error::Result;
use crate::gfx::color::Color;
use crate::gfx::mesh::{Mesh, Vertex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidConfig {
    pub radius_x: f32,
    pub radius_y: f32,
    pub radius_z: f32,
    /// Latitude rings, pole to pole inclusive
    pub stacks: u32,
    /// Longitude lines
    pub slices: u32,
    pub color: Color,
}

impl Default for EllipsoidConfig {
    fn default() -> Self {
        Self {
            radius_x: 1.0,
            radius_y: 0.5,
            radius_z: 0.5,
            stacks: 18,
            slices: 36,
            color: Color::BLUE,
        }
    }
}

impl EllipsoidConfig {
    pub const MIN_STACKS: u32 = 3;
    pub const MIN_SLICES: u32 = 3;

    pub fn new(radius_x: f32, radius_y: f32, radius_z: f32, stacks: u32, slices: u32) -> Self {
        Self {
            radius_x,
            radius_y,
            radius_z,
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
        require_length("radius_x", self.radius_x)?;
        require_length("radius_y", self.radius_y)?;
        require_length("radius_z", self.radius_z)?;
        self.color.validate()
    }
}

impl Tessellate for EllipsoidConfig {
    fn tessellate(&self) -> Result<Mesh> {
        generate_ellipsoid(self)
    }

    fn name(&self) -> &'static str {
        "ellipsoid"
    }
}

/// Latitude of stack `i` out of `stacks`, from -π/2 to π/2
pub(crate) fn latitude(i: u32, stacks: u32) -> f32 {
    i as f32 / (stacks - 1) as f32 * PI - FRAC_PI_2
}

/// `sin` and `cos` of a latitude in [-π/2, π/2].
///
/// `cos` is clamped at zero because f32 `cos(±π/2)` comes out slightly
/// negative, which would mirror the pole rows through the axis.
fn latitude_sin_cos(phi: f32) -> (f32, f32) {
    let (sin_phi, cos_phi) = phi.sin_cos();
    (sin_phi, cos_phi.max(0.0))
}

/// Point on the ellipsoid at latitude `phi`, longitude `theta`
pub(crate) fn surface_point(radii: Vector3<f32>, phi: f32, theta: f32) -> [f32; 3] {
    let (sin_phi, cos_phi) = latitude_sin_cos(phi);
    let (sin_theta, cos_theta) = theta.sin_cos();
    [
        radii.x * cos_phi * cos_theta,
        radii.y * cos_phi * sin_theta,
        radii.z * sin_phi,
    ]
}

/// Outward unit normal at latitude `phi`, longitude `theta`.
///
/// The cross product of the partials `dP/dtheta x dP/dphi` equals
/// `rx * ry * rz * cos(phi)` times `(cos(phi)cos(theta)/rx, cos(phi)sin(theta)/ry, sin(phi)/rz)`,
/// the implicit-surface gradient. The scalar is dropped so the poles, where
/// `cos(phi)` vanishes, still get a well-defined normal.
pub(crate) fn surface_normal(radii: Vector3<f32>, phi: f32, theta: f32) -> [f32; 3] {
    let (sin_phi, cos_phi) = latitude_sin_cos(phi);
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vector3::new(
        cos_phi * cos_theta / radii.x,
        cos_phi * sin_theta / radii.y,
        sin_phi / radii.z,
    )
    .normalize()
    .into()
}

/// Generates a `stacks x slices` latitude/longitude grid.
///
/// Longitude steps by `2π / slices` with no duplicated seam column; the last
/// column joins the first through the index buffer. Both pole rows collapse to
/// a point and are triangulated like any other row. Texture coordinates are
/// left at zero.
pub fn generate_ellipsoid(config: &EllipsoidConfig) -> Result<Mesh> {
    config.validate().map_err(|e| rejected("ellipsoid", e))?;

    let (stacks, slices) = (config.stacks, config.slices);
    let vertex_count = indexable_vertex_count(u64::from(stacks) * u64::from(slices))?;
    let radii = Vector3::new(config.radius_x, config.radius_y, config.radius_z);
    let color: [f32; 3] = config.color.into();

    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..stacks {
        let phi = latitude(i, stacks);
        for j in 0..slices {
            let theta = j as f32 / slices as f32 * TAU;
            vertices.push(Vertex::new(
                surface_point(radii, phi, theta),
                surface_normal(radii, phi, theta),
                color,
            ));
        }
    }

    let triangles = grid_triangles(stacks, slices);

    Ok(finish("ellipsoid", vertices, triangles))
}
