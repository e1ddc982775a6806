//! Capped cylinder along the Y axis.

use std::f32::consts::TAU;

use super::{finish, indexable_vertex_count, rejected, require_count, require_length, Tessellate};
use crate::error::Result;
use crate::gfx::color::Color;
use crate::gfx::mesh::{Mesh, Vertex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderConfig {
    pub radius: f32,
    pub height: f32,
    /// Accepted for parity with the other round shapes; the side is a single band
    pub stacks: u32,
    pub slices: u32,
    pub color: Color,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            stacks: 18,
            slices: 36,
            color: Color::BLUE,
        }
    }
}

impl CylinderConfig {
    pub const MIN_SLICES: u32 = 3;

    pub fn new(radius: f32, height: f32, stacks: u32, slices: u32) -> Self {
        Self {
            radius,
            height,
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
        require_count("slices", self.slices, Self::MIN_SLICES)?;
        require_length("radius", self.radius)?;
        require_length("height", self.height)?;
        self.color.validate()
    }
}

impl Tessellate for CylinderConfig {
    fn tessellate(&self) -> Result<Mesh> {
        generate_cylinder(self)
    }

    fn name(&self) -> &'static str {
        "cylinder"
    }
}

/// Generates a cylinder of `4 * slices + 2` vertices and `4 * slices` triangles.
///
/// Vertex layout:
/// - 0: top cap center, 1: bottom cap center
/// - then four rings of `slices` vertices: top cap rim (+Y normal), bottom
///   cap rim (-Y normal), top side rim and bottom side rim (radial normals)
///
/// The rim positions appear twice because a cap and the side need different
/// normals at the same point.
pub fn generate_cylinder(config: &CylinderConfig) -> Result<Mesh> {
    config.validate().map_err(|e| rejected("cylinder", e))?;

    let n = config.slices;
    let vertex_count = indexable_vertex_count(4 * u64::from(n) + 2)?;
    let radius = config.radius;
    let half_height = config.height * 0.5;
    let color: [f32; 3] = config.color.into();

    let rim: Vec<(f32, f32)> = (0..n)
        .map(|i| {
            let theta = i as f32 / n as f32 * TAU;
            (theta.cos(), theta.sin())
        })
        .collect();

    let mut vertices = Vec::with_capacity(vertex_count);
    vertices.push(Vertex::new([0.0, half_height, 0.0], [0.0, 1.0, 0.0], color));
    vertices.push(Vertex::new([0.0, -half_height, 0.0], [0.0, -1.0, 0.0], color));

    // cap rims
    for (y, normal) in [(half_height, [0.0, 1.0, 0.0]), (-half_height, [0.0, -1.0, 0.0])] {
        vertices.extend(
            rim.iter()
                .map(|&(cos, sin)| Vertex::new([radius * cos, y, radius * sin], normal, color)),
        );
    }

    // side rims
    for y in [half_height, -half_height] {
        vertices.extend(rim.iter().map(|&(cos, sin)| {
            Vertex::new([radius * cos, y, radius * sin], [cos, 0.0, sin], color)
        }));
    }

    let top_cap = 2;
    let bottom_cap = 2 + n;
    let top_side = 2 + 2 * n;
    let bottom_side = 2 + 3 * n;

    let mut triangles = Vec::with_capacity(4 * n as usize);
    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push([0, top_cap + next, top_cap + i]);
    }
    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push([1, bottom_cap + i, bottom_cap + next]);
    }
    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push([top_side + i, top_side + next, bottom_side + i]);
    }
    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push([bottom_side + i, top_side + next, bottom_side + next]);
    }

    Ok(finish("cylinder", vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_cylinder_four_slices() -> anyhow::Result<()> {
        let cylinder = generate_cylinder(&CylinderConfig::new(0.5, 1.0, 18, 4))?;
        assert_eq!(cylinder.vertex_count(), 18);
        assert_eq!(cylinder.triangle_count(), 16);
        assert_eq!(cylinder.indices().len(), 48);

        let first_rim = cylinder.vertices()[2];
        assert_close(first_rim.position, [0.5, 0.5, 0.0]);
        assert_eq!(first_rim.normal, [0.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_cylinder_counts() {
        for slices in [3, 8, 36] {
            let cylinder = generate_cylinder(&CylinderConfig::new(1.0, 2.0, 1, slices)).unwrap();
            assert_eq!(cylinder.vertex_count(), 4 * slices as usize + 2);
            assert_eq!(cylinder.triangle_count(), 4 * slices as usize);
            assert_indices_in_bounds(&cylinder);
            assert_unit_normals(&cylinder);
            assert_outward_winding(&cylinder);
        }
    }

    #[test]
    fn test_cylinder_rims_share_positions_not_normals() {
        let n = 6;
        let cylinder = generate_cylinder(&CylinderConfig::new(0.5, 1.0, 18, n)).unwrap();
        let v = cylinder.vertices();
        for i in 0..n as usize {
            let top_cap = v[2 + i];
            let top_side = v[2 + 2 * n as usize + i];
            assert_eq!(top_cap.position, top_side.position);
            assert_ne!(top_cap.normal, top_side.normal);
            assert_eq!(top_side.normal[1], 0.0);

            let bottom_cap = v[2 + n as usize + i];
            let bottom_side = v[2 + 3 * n as usize + i];
            assert_eq!(bottom_cap.position, bottom_side.position);
            assert_eq!(bottom_cap.normal, [0.0, -1.0, 0.0]);
        }
    }

    #[test]
    fn test_cylinder_caps_fan_from_center() {
        let n = 5;
        let cylinder = generate_cylinder(&CylinderConfig::new(0.5, 1.0, 18, n)).unwrap();
        let triangles = cylinder.triangles();
        assert!(triangles[..n as usize].iter().all(|t| t[0] == 0));
        assert!(triangles[n as usize..2 * n as usize].iter().all(|t| t[0] == 1));
        // last slice wraps back to the first rim vertex
        assert_eq!(triangles[n as usize - 1], [0, 2, 2 + n - 1]);
    }

    #[test]
    fn test_cylinder_ignores_stacks() {
        let a = generate_cylinder(&CylinderConfig::new(0.5, 1.0, 1, 12)).unwrap();
        let b = generate_cylinder(&CylinderConfig::new(0.5, 1.0, 40, 12)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cylinder_validation() {
        assert_eq!(
            generate_cylinder(&CylinderConfig::new(0.5, 1.0, 18, 2)),
            Err(GeometryError::InvalidParameter {
                name: "slices",
                value: 2,
                minimum: 3
            })
        );
        assert!(matches!(
            generate_cylinder(&CylinderConfig::new(0.5, -1.0, 18, 8)),
            Err(GeometryError::DegenerateGeometry { name: "height", .. })
        ));
        assert!(matches!(
            generate_cylinder(&CylinderConfig::new(0.5, 1.0, 18, 8).with_color(Color::new(2.0, 0.0, 0.0))),
            Err(GeometryError::ColorOutOfRange { channel: 'r', .. })
        ));
    }
}
