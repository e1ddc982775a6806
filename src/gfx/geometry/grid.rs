//! # Parametric Grids
//!
//! Sphere, ellipsoid and torus are all a `rows x columns` grid of vertices laid
//! out row-major, so vertex `(row, column)` lives at `row * columns + column`.
//! This module holds the pieces they share: seam sampling and the two-triangle
//! quad triangulation.

use std::f32::consts::TAU;

/// Angle and texture coordinate for one grid line of a seam-stitched axis.
///
/// Over `count` grid lines the angle advances in `count - 1` steps, so the
/// last line lands back on angle 0 and duplicates the first in position.
/// The texture coordinate does not wrap and reaches exactly 1.0 there, which
/// keeps textures free of a visible seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamSample {
    /// Angle in radians, in [0, 2π)
    pub angle: f32,
    /// Texture coordinate, in [0, 1]
    pub uv: f32,
}

impl SeamSample {
    /// Samples line `index` of `count`.
    ///
    /// # Panics
    ///
    /// Panics if `count < 2`: a single line has no step to divide the circle by.
    pub fn at(index: u32, count: u32) -> Self {
        assert!(count >= 2, "seam sampling needs at least 2 lines, got {}", count);
        let steps = count - 1;
        Self {
            angle: (index % steps) as f32 / steps as f32 * TAU,
            uv: index as f32 / steps as f32,
        }
    }
}

/// Triangulates a row-major vertex grid, two triangles per quad.
///
/// For the quad whose lower-left corner is `(i, j)` the triangles are
/// `(i,j) (i,j+1) (i+1,j+1)` and `(i,j) (i+1,j+1) (i+1,j)`. With rows
/// running in the direction of the surface's second partial derivative this
/// winds counter-clockwise seen from outside. Columns wrap, so the last column
/// joins column 0 by index; rows never wrap. Fewer than two rows yield no
/// triangles.
pub fn grid_triangles(rows: u32, columns: u32) -> Vec<[u32; 3]> {
    let row_bands = rows.saturating_sub(1);

    let mut triangles = Vec::with_capacity(2 * row_bands as usize * columns as usize);
    for i in 0..row_bands {
        for j in 0..columns {
            let next = (j + 1) % columns;

            let current_row = i * columns;
            let next_row = (i + 1) * columns;

            triangles.push([current_row + j, current_row + next, next_row + next]);
            triangles.push([current_row + j, next_row + next, next_row + j]);
        }
    }

    triangles
}
