//! # LazyTools Scene
//!
//! Host-environment abstraction for the LazyTools mesh utilities.
//!
//! The editing tools in this workspace never talk to a concrete scene
//! graph directly. They operate against the [`Scene`] trait, which models
//! the small slice of a DCC host the tools need: reading a mesh's edge
//! set, baking an object's scale into its vertex data, deleting faces,
//! creating a new mesh object, raycasting, world-space bounding boxes and
//! visibility toggling.
//!
//! [`MemScene`] is a complete in-memory implementation, used by the test
//! suites and by standalone embedding.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use lazytools_scene::{MemScene, Scene};
//!
//! let mut scene = MemScene::new();
//! let tri = scene.add_object(
//!     "tri",
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![],
//!     vec![vec![0, 1, 2]],
//! );
//! assert_eq!(scene.edges(tri).unwrap().len(), 3);
//! ```

pub mod error;
pub mod mem;
pub mod ray;

pub use error::SceneError;
pub use mem::{MemScene, ObjectId};

use glam::DVec3;

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<Id> {
    /// World-space position of the hit.
    pub position: DVec3,
    /// The object that was hit.
    pub object: Id,
}

/// The slice of a host scene graph the LazyTools editing tools rely on.
///
/// Implementations are expected to be exclusive-access: all methods take
/// `&self`/`&mut self` and no tool holds references across calls, so a
/// host binding can mutate freely between invocations.
pub trait Scene {
    /// Stable handle to an object in the scene.
    type ObjectId: Copy + Eq + core::fmt::Debug;

    /// Returns every edge of the object's mesh as a pair of endpoint
    /// positions in the object's local space.
    ///
    /// Includes both wire edges and the boundary edges of faces, each
    /// undirected edge reported once.
    fn edges(&self, object: Self::ObjectId) -> Result<Vec<(DVec3, DVec3)>, SceneError>;

    /// Bakes the object's scale into its vertex data and resets the
    /// scale to one, so subsequent edits operate in world units.
    fn apply_scale(&mut self, object: Self::ObjectId) -> Result<(), SceneError>;

    /// Removes all polygonal faces from the object's mesh, keeping its
    /// vertices and edges.
    fn delete_faces(&mut self, object: Self::ObjectId) -> Result<(), SceneError>;

    /// Creates a new mesh object from raw vertex and face buffers and
    /// links it into the scene.
    fn create_mesh_object(
        &mut self,
        name: &str,
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
    ) -> Result<Self::ObjectId, SceneError>;

    /// Casts a ray against all visible geometry and returns the nearest
    /// hit, if any. Hidden objects are excluded.
    fn ray_cast(&self, origin: DVec3, direction: DVec3) -> Option<RayHit<Self::ObjectId>>;

    /// Returns the world-space bounding-box corners of the object, or of
    /// its child hierarchy when `include_children` is set and children
    /// exist.
    fn bounding_box_world(
        &self,
        object: Self::ObjectId,
        include_children: bool,
    ) -> Result<Vec<DVec3>, SceneError>;

    /// Shows or hides an object. Hidden objects are skipped by raycasts.
    fn set_hidden(&mut self, object: Self::ObjectId, hidden: bool) -> Result<(), SceneError>;

    /// All descendants of the object, depth-first.
    fn children_recursive(&self, object: Self::ObjectId) -> Vec<Self::ObjectId>;

    /// The currently selected objects.
    fn selected_objects(&self) -> Vec<Self::ObjectId>;

    /// World-space location of the object's origin.
    fn location(&self, object: Self::ObjectId) -> Result<DVec3, SceneError>;

    /// Moves the object vertically by `delta` world units.
    fn translate_z(&mut self, object: Self::ObjectId, delta: f64) -> Result<(), SceneError>;
}
