//! # Scene Errors
//!
//! Error types for scene-graph operations.

use thiserror::Error;

/// Errors that can occur while manipulating the host scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The referenced object does not exist in the scene.
    #[error("no object with index {index}")]
    ObjectNotFound {
        /// Index of the missing object.
        index: usize,
    },

    /// The host could not bake the object's scale into its vertex data.
    #[error("cannot apply object scale: {message}")]
    ApplyScale {
        /// Description of the failure.
        message: String,
    },

    /// Mesh buffers handed to the scene are inconsistent.
    #[error("invalid mesh data: {message}")]
    InvalidMesh {
        /// Description of the inconsistency.
        message: String,
    },
}

impl SceneError {
    /// Creates an apply-scale failure.
    pub fn apply_scale(message: impl Into<String>) -> Self {
        Self::ApplyScale {
            message: message.into(),
        }
    }

    /// Creates an invalid-mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::ObjectNotFound { index: 7 };
        assert!(err.to_string().contains('7'));

        let err = SceneError::apply_scale("zero scale component");
        assert!(err.to_string().contains("zero scale"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SceneError>();
    }
}
