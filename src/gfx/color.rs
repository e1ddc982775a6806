//! RGB colors applied uniformly to generated vertices.

use crate::error::{GeometryError, Result};

/// Flat RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::new(0.5, 0.0, 0.5);
    pub const SILVER: Color = Color::new(0.75, 0.75, 0.75);
    pub const SOFTBLUE: Color = Color::new(0.4, 0.6, 0.9);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Checks every channel lies in [0, 1]
    pub fn validate(&self) -> Result<()> {
        for (channel, value) in [('r', self.r), ('g', self.g), ('b', self.b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeometryError::ColorOutOfRange { channel, value });
            }
        }
        Ok(())
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}
