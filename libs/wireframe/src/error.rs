//! # Wireframe Errors
//!
//! Error types for the wireframe construction pipeline.
//!
//! ## Error Policy
//!
//! - Unknown shape tags and scale-normalization failures abort the build
//! - Degenerate edges are surfaced as errors by the frame solver; the
//!   build driver downgrades them to skip-with-warning
//! - Corners with too few points for a hull are a defined no-op, not an
//!   error

use glam::DVec3;
use lazytools_scene::SceneError;
use thiserror::Error;

/// Errors that can occur during wireframe generation.
#[derive(Debug, Error)]
pub enum WireframeError {
    /// A profile shape tag that the generator does not know.
    #[error("unsupported profile shape: {shape}")]
    UnsupportedShape {
        /// The rejected tag.
        shape: String,
    },

    /// An edge whose endpoints coincide; it has no direction to extrude
    /// along.
    #[error("degenerate edge at ({}, {}, {}): endpoints coincide", position.x, position.y, position.z)]
    DegenerateEdge {
        /// Position of the collapsed edge.
        position: DVec3,
    },

    /// The host could not bake the input object's scale into its vertex
    /// data, so profile sizes would not be comparable to edge lengths.
    #[error("cannot normalize object scale: {message}")]
    ScaleNormalization {
        /// Description of the host failure.
        message: String,
    },

    /// A user-supplied parameter is out of range.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the invalid value.
        message: String,
    },

    /// Error from the host scene while reading or writing objects.
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

impl WireframeError {
    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an unsupported-shape error.
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            shape: shape.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WireframeError::unsupported_shape("HEXAGON");
        assert!(err.to_string().contains("HEXAGON"));

        let err = WireframeError::DegenerateEdge {
            position: DVec3::new(1.0, 2.0, 3.0),
        };
        assert!(err.to_string().contains("degenerate edge"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WireframeError>();
    }
}
