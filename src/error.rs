//! # Geometry Errors
//!
//! Every generator validates its configuration up front and reports the first
//! problem it finds. Nothing is clamped and no partial mesh is ever returned.

use thiserror::Error;

/// Convenience alias used throughout the generators
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Reasons a shape configuration can be rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A subdivision count is below the minimum the shape needs.
    ///
    /// Minimums per shape:
    /// - cylinder: `slices >= 3` (`stacks` is not checked)
    /// - ellipsoid: `stacks >= 3`, `slices >= 3`
    /// - sphere: `stacks >= 3`, `slices >= 4` (three longitudes plus the seam)
    /// - torus: `rings >= 4`, `nsides >= 4` (seam-stitched on both axes)
    #[error("invalid parameter `{name}`: got {value}, need at least {minimum}")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        minimum: u32,
    },

    /// A length that must be strictly positive is zero, negative or not finite
    #[error("degenerate geometry: `{name}` must be a positive finite length, got {value}")]
    DegenerateGeometry { name: &'static str, value: f32 },

    /// A color channel lies outside [0, 1]
    #[error("color channel `{channel}` out of range [0, 1]: {value}")]
    ColorOutOfRange { channel: char, value: f32 },

    /// The requested grid has more vertices than a `u32` index can address
    #[error("mesh would need {requested} vertices, more than a u32 index buffer can address")]
    TooManyVertices { requested: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = GeometryError::InvalidParameter {
            name: "slices",
            value: 2,
            minimum: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `slices`: got 2, need at least 3"
        );

        let err = GeometryError::DegenerateGeometry {
            name: "radius",
            value: -1.0,
        };
        assert!(err.to_string().contains("`radius`"));
        assert!(err.to_string().contains("-1"));
    }
}
