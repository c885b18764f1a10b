//! # Output Mesh
//!
//! Polygonal mesh accumulator for the generated wireframe geometry.
//!
//! Lateral prism faces are quads and junction caps are triangles, so
//! faces are stored as variable-length index loops rather than fixed
//! triangles. All coordinates are f64.

use glam::DVec3;

/// The accumulated output mesh: vertex positions plus polygonal faces.
///
/// Built incrementally during edge processing and junction closing, then
/// globally deduplicated by [`crate::weld::weld`]. Owned exclusively by
/// the build driver for the duration of one build call.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lazytools_wireframe::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_face(vec![a, b, c]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision).
    vertices: Vec<DVec3>,
    /// Faces as vertex index loops (quads for laterals, triangles for caps).
    faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face as a loop of vertex indices.
    pub fn add_face(&mut self, indices: Vec<u32>) {
        self.faces.push(indices);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Consumes the mesh into its raw vertex and face buffers.
    pub fn into_buffers(self) -> (Vec<DVec3>, Vec<Vec<u32>>) {
        (self.vertices, self.faces)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; the origin pair for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that every face has at least 3 vertices, references only
    /// existing vertices, and repeats none of them.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        for face in &self.faces {
            if face.len() < 3 {
                return false;
            }
            if face.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            for (n, &i) in face.iter().enumerate() {
                if face[n + 1..].contains(&i) {
                    return false;
                }
            }
        }
        true
    }
}
