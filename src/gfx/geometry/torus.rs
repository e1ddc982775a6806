//! Torus lying in the XY plane, seam-stitched in both directions.

use cgmath::{InnerSpace, Vector3};

use super::grid::{grid_triangles, SeamSample};
use super::{finish, indexable_vertex_count, rejected, require_count, require_length, Tessellate};
use crate::error::{GeometryError, Result};
use crate::gfx::color::Color;
use crate::gfx::mesh::{Mesh, Vertex};

/// Torus parameters.
///
/// `rings` counts grid rows and drives the angle around the tube's own
/// cross-section; `nsides` counts grid columns and drives the angle of
/// revolution around the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusConfig {
    /// Radius of the tube
    pub inner_radius: f32,
    /// Distance from the origin to the center of the tube
    pub outer_radius: f32,
    pub nsides: u32,
    pub rings: u32,
    pub color: Color,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            inner_radius: 0.25,
            outer_radius: 0.5,
            nsides: 36,
            rings: 36,
            color: Color::SOFTBLUE,
        }
    }
}

impl TorusConfig {
    /// Three distinct angles plus the seam line, on both axes
    pub const MIN_SUBDIVISIONS: u32 = 4;

    pub fn new(inner_radius: f32, outer_radius: f32, nsides: u32, rings: u32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            nsides,
            rings,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_count("nsides", self.nsides, Self::MIN_SUBDIVISIONS)?;
        require_count("rings", self.rings, Self::MIN_SUBDIVISIONS)?;
        require_length("inner_radius", self.inner_radius)?;
        require_length("outer_radius", self.outer_radius)?;

        // innermost distance from the Z axis
        let hole = self.outer_radius - self.inner_radius;
        if hole <= 0.0 {
            return Err(GeometryError::DegenerateGeometry {
                name: "outer_radius - inner_radius",
                value: hole,
            });
        }

        self.color.validate()
    }
}

impl Tessellate for TorusConfig {
    fn tessellate(&self) -> Result<Mesh> {
        generate_torus(self)
    }

    fn name(&self) -> &'static str {
        "torus"
    }
}

/// Generates a `rings x nsides` torus with texture coordinates.
///
/// Both angles come from [`SeamSample`], so the last row repeats the first row
/// and the last column repeats the first column in position while U (rows)
/// and V (columns) reach exactly 1.0. Like the sphere, the index buffer still
/// wraps the last column back to the first; those quads have zero area.
/// Totals: `rings * nsides` vertices, `2 * nsides * (rings - 1)` triangles.
pub fn generate_torus(config: &TorusConfig) -> Result<Mesh> {
    config.validate().map_err(|e| rejected("torus", e))?;

    let (rings, nsides) = (config.rings, config.nsides);
    let vertex_count = indexable_vertex_count(u64::from(rings) * u64::from(nsides))?;
    let (inner, outer) = (config.inner_radius, config.outer_radius);
    let color: [f32; 3] = config.color.into();

    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..rings {
        let tube = SeamSample::at(i, rings);
        let (sin_phi, cos_phi) = tube.angle.sin_cos();
        let distance = outer + inner * cos_phi;

        for j in 0..nsides {
            let revolution = SeamSample::at(j, nsides);
            let (sin_theta, cos_theta) = revolution.angle.sin_cos();

            let position = [distance * cos_theta, distance * sin_theta, inner * sin_phi];
            // from the tube's center circle out to the surface
            let normal = Vector3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi).normalize();

            vertices.push(Vertex::with_uv(
                position,
                normal.into(),
                color,
                [tube.uv, revolution.uv],
            ));
        }
    }

    let triangles = grid_triangles(rings, nsides);

    Ok(finish("torus", vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_torus_four_by_four() -> anyhow::Result<()> {
        let torus = generate_torus(&TorusConfig::new(0.25, 0.5, 4, 4))?;
        assert_eq!(torus.vertex_count(), 16);
        assert_eq!(torus.triangle_count(), 24);
        // the last column joins column 0 through the index buffer
        assert!(torus.triangles().contains(&[3, 0, 4]));
        assert_close(torus.vertices()[0].position, [0.75, 0.0, 0.0]);
        assert_close(torus.vertices()[0].normal, [1.0, 0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_torus_counts() {
        for (nsides, rings) in [(4, 4), (36, 36), (12, 5)] {
            let torus = generate_torus(&TorusConfig::new(0.25, 0.5, nsides, rings)).unwrap();
            assert_eq!(torus.vertex_count(), (rings * nsides) as usize);
            assert_eq!(torus.triangle_count(), (2 * nsides * (rings - 1)) as usize);
            assert_indices_in_bounds(&torus);
            assert_unit_normals(&torus);
            assert_outward_winding(&torus);
        }
    }

    #[test]
    fn test_torus_seams() {
        let (nsides, rings) = (10, 8);
        let torus = generate_torus(&TorusConfig::new(0.3, 1.0, nsides, rings)).unwrap();
        let v = torus.vertices();
        let at = |i: u32, j: u32| v[(i * nsides + j) as usize];

        for i in 0..rings {
            let (first, last) = (at(i, 0), at(i, nsides - 1));
            assert_eq!(first.position, last.position);
            assert_eq!(last.tex_coords[1] - first.tex_coords[1], 1.0);
        }
        for j in 0..nsides {
            let (first, last) = (at(0, j), at(rings - 1, j));
            assert_eq!(first.position, last.position);
            assert_eq!(last.tex_coords[0] - first.tex_coords[0], 1.0);
        }
    }

    #[test]
    fn test_torus_normals_ignore_outer_radius() {
        let thin = generate_torus(&TorusConfig::new(0.25, 0.5, 9, 7)).unwrap();
        let wide = generate_torus(&TorusConfig::new(0.25, 4.0, 9, 7)).unwrap();
        for (a, b) in thin.vertices().iter().zip(wide.vertices()) {
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.tex_coords, b.tex_coords);
        }
    }

    #[test]
    fn test_torus_surface_distance() {
        let (inner, outer) = (0.2, 0.7);
        let torus = generate_torus(&TorusConfig::new(inner, outer, 16, 12)).unwrap();
        for vertex in torus.vertices() {
            let p = Vector3::from(vertex.position);
            let ring_distance = (p.x * p.x + p.y * p.y).sqrt() - outer;
            let tube_distance = (ring_distance * ring_distance + p.z * p.z).sqrt();
            assert!((tube_distance - inner).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_validation() {
        assert_eq!(
            generate_torus(&TorusConfig::new(0.25, 0.5, 36, 3)),
            Err(GeometryError::InvalidParameter {
                name: "rings",
                value: 3,
                minimum: 4
            })
        );
        assert!(matches!(
            generate_torus(&TorusConfig::new(0.5, 0.5, 36, 36)),
            Err(GeometryError::DegenerateGeometry {
                name: "outer_radius - inner_radius",
                ..
            })
        ));
        assert!(matches!(
            generate_torus(&TorusConfig::new(-0.1, 0.5, 36, 36)),
            Err(GeometryError::DegenerateGeometry { name: "inner_radius", .. })
        ));
    }
}
