//! Error types for the floor-drop tool.

use lazytools_scene::SceneError;
use thiserror::Error;

/// Errors that can occur while dropping an object.
#[derive(Debug, Error)]
pub enum FloorDropError {
    /// A user-supplied parameter is out of range.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the invalid value.
        message: String,
    },

    /// The host reported no bounding box for the object's hierarchy, so
    /// there is no lowest point to drop from.
    #[error("object has no bounding box")]
    NoBoundingBox,

    /// Error from the host scene.
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

impl FloorDropError {
    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FloorDropError::invalid_parameter("threshold must be finite");
        assert!(err.to_string().contains("threshold must be finite"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FloorDropError>();
    }
}
