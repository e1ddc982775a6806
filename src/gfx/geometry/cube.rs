//! Axis-aligned box centered at the origin.

use cgmath::{ElementWise, Vector3};

use super::{finish, rejected, require_length, Tessellate};
use crate::error::Result;
use crate::gfx::color::Color;
use crate::gfx::mesh::{Mesh, Vertex};

/// Box dimensions: `length` along X, `height` along Y (up), `width` along Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeConfig {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 1.0,
            height: 1.0,
            color: Color::BLUE,
        }
    }
}

impl CubeConfig {
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            length,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_length("length", self.length)?;
        require_length("width", self.width)?;
        require_length("height", self.height)?;
        self.color.validate()
    }
}

impl Tessellate for CubeConfig {
    fn tessellate(&self) -> Result<Mesh> {
        generate_cube(self)
    }

    fn name(&self) -> &'static str {
        "cube"
    }
}

/// Outward normal plus the face's right and up axes, `right x up == normal`
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Corner offsets along (right, up) with their texture coordinates, counter-clockwise
const CORNERS: [(f32, f32, [f32; 2]); 4] = [
    (-1.0, -1.0, [0.0, 0.0]),
    (1.0, -1.0, [1.0, 0.0]),
    (1.0, 1.0, [1.0, 1.0]),
    (-1.0, 1.0, [0.0, 1.0]),
];

/// Generates a box with 4 vertices and 2 triangles per face.
///
/// Faces do not share vertices so each keeps a flat normal.
pub fn generate_cube(config: &CubeConfig) -> Result<Mesh> {
    config.validate().map_err(|e| rejected("cube", e))?;

    let half = Vector3::new(config.length, config.height, config.width) * 0.5;
    let color: [f32; 3] = config.color.into();

    let mut vertices = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    for (normal, right, up) in FACES {
        let base = vertices.len() as u32;
        let (n, r, u) = (
            Vector3::from(normal),
            Vector3::from(right),
            Vector3::from(up),
        );

        for (along_right, along_up, uv) in CORNERS {
            let corner = (n + r * along_right + u * along_up).mul_element_wise(half);
            vertices.push(Vertex::with_uv(corner.into(), normal, color, uv));
        }

        triangles.push([base, base + 1, base + 2]);
        triangles.push([base, base + 2, base + 3]);
    }

    Ok(finish("cube", vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube(&CubeConfig::default()).unwrap();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.indices().len(), 36);

        assert_indices_in_bounds(&cube);
        assert_unit_normals(&cube);
        assert_outward_winding(&cube);
    }

    #[test]
    fn test_cube_extents() {
        // length 2 on X, width 1 on Z, height 4 on Y
        let cube = generate_cube(&CubeConfig::new(2.0, 1.0, 4.0)).unwrap();
        let bounds = cube.bounds().unwrap();
        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, -0.5));
        assert_eq!(bounds.max, Vector3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_cube_color_is_uniform() {
        let config = CubeConfig::new(0.3, 0.3, 0.3).with_color(Color::PURPLE);
        let cube = generate_cube(&config).unwrap();
        assert!(cube
            .vertices()
            .iter()
            .all(|v| v.color == <[f32; 3]>::from(Color::PURPLE)));
    }

    #[test]
    fn test_cube_rejects_flat_box() {
        assert_eq!(
            generate_cube(&CubeConfig::new(1.0, 0.0, 1.0)),
            Err(GeometryError::DegenerateGeometry {
                name: "width",
                value: 0.0
            })
        );
    }
}
