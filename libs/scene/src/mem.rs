//! # In-Memory Scene
//!
//! A self-contained [`Scene`] implementation backed by plain vectors.
//! Used by the test suites of the editing tools and by standalone
//! embedding outside a DCC host.
//!
//! Object transforms are a world-space location plus a per-axis scale;
//! rotations are out of scope for the tools in this workspace. Parent
//! links are used for hierarchy traversal and for moving a hierarchy as
//! one unit.

use std::collections::HashSet;

use glam::DVec3;

use crate::error::SceneError;
use crate::ray::ray_triangle_intersect;
use crate::{RayHit, Scene};

/// Handle to an object stored in a [`MemScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// One object in the in-memory scene.
#[derive(Debug, Clone)]
struct MemObject {
    name: String,
    vertices: Vec<DVec3>,
    /// Wire edges that are not part of any face.
    edges: Vec<[u32; 2]>,
    /// Polygonal faces as vertex index loops.
    faces: Vec<Vec<u32>>,
    scale: DVec3,
    location: DVec3,
    parent: Option<ObjectId>,
    hidden: bool,
    selected: bool,
}

/// In-memory scene graph.
#[derive(Debug, Default)]
pub struct MemScene {
    objects: Vec<MemObject>,
}

impl MemScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mesh object with identity transform and returns its handle.
    pub fn add_object(
        &mut self,
        name: &str,
        vertices: Vec<DVec3>,
        edges: Vec<[u32; 2]>,
        faces: Vec<Vec<u32>>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(MemObject {
            name: name.to_string(),
            vertices,
            edges,
            faces,
            scale: DVec3::ONE,
            location: DVec3::ZERO,
            parent: None,
            hidden: false,
            selected: false,
        });
        id
    }

    /// Sets the object's per-axis scale.
    pub fn set_scale(&mut self, object: ObjectId, scale: DVec3) -> Result<(), SceneError> {
        self.object_mut(object)?.scale = scale;
        Ok(())
    }

    /// Sets the object's world-space location.
    pub fn set_location(&mut self, object: ObjectId, location: DVec3) -> Result<(), SceneError> {
        self.object_mut(object)?.location = location;
        Ok(())
    }

    /// Parents `child` under `parent` for hierarchy traversal.
    pub fn set_parent(&mut self, child: ObjectId, parent: ObjectId) -> Result<(), SceneError> {
        self.object(parent)?;
        self.object_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Marks the object as selected.
    pub fn set_selected(&mut self, object: ObjectId, selected: bool) -> Result<(), SceneError> {
        self.object_mut(object)?.selected = selected;
        Ok(())
    }

    /// Returns the object's name.
    pub fn name(&self, object: ObjectId) -> Result<&str, SceneError> {
        Ok(&self.object(object)?.name)
    }

    /// Returns the object's local-space vertices.
    pub fn vertices(&self, object: ObjectId) -> Result<&[DVec3], SceneError> {
        Ok(&self.object(object)?.vertices)
    }

    /// Returns the object's face loops.
    pub fn faces(&self, object: ObjectId) -> Result<&[Vec<u32>], SceneError> {
        Ok(&self.object(object)?.faces)
    }

    /// Returns whether the object is hidden.
    pub fn is_hidden(&self, object: ObjectId) -> Result<bool, SceneError> {
        Ok(self.object(object)?.hidden)
    }

    fn object(&self, id: ObjectId) -> Result<&MemObject, SceneError> {
        self.objects
            .get(id.0)
            .ok_or(SceneError::ObjectNotFound { index: id.0 })
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut MemObject, SceneError> {
        self.objects
            .get_mut(id.0)
            .ok_or(SceneError::ObjectNotFound { index: id.0 })
    }

    fn world_vertex(obj: &MemObject, v: DVec3) -> DVec3 {
        obj.location + obj.scale * v
    }

    /// World-space AABB corners of a single object. Empty meshes report
    /// their origin, so an empty parent still anchors a bounding box.
    fn object_corners(obj: &MemObject) -> Vec<DVec3> {
        if obj.vertices.is_empty() {
            return vec![obj.location];
        }
        let mut min = Self::world_vertex(obj, obj.vertices[0]);
        let mut max = min;
        for &v in &obj.vertices[1..] {
            let w = Self::world_vertex(obj, v);
            min = min.min(w);
            max = max.max(w);
        }
        vec![
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(min.x, max.y, max.z),
            DVec3::new(max.x, max.y, max.z),
        ]
    }
}

impl Scene for MemScene {
    type ObjectId = ObjectId;

    fn edges(&self, object: ObjectId) -> Result<Vec<(DVec3, DVec3)>, SceneError> {
        let obj = self.object(object)?;

        // Undirected dedup: wire edges plus every face boundary edge.
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut pairs: Vec<(u32, u32)> = Vec::new();
        let mut push = |a: u32, b: u32| {
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                pairs.push(key);
            }
        };

        for e in &obj.edges {
            push(e[0], e[1]);
        }
        for face in &obj.faces {
            for i in 0..face.len() {
                push(face[i], face[(i + 1) % face.len()]);
            }
        }

        let n = obj.vertices.len() as u32;
        for &(a, b) in &pairs {
            if a >= n || b >= n {
                return Err(SceneError::invalid_mesh(format!(
                    "edge ({a}, {b}) references missing vertex"
                )));
            }
        }

        Ok(pairs
            .into_iter()
            .map(|(a, b)| (obj.vertices[a as usize], obj.vertices[b as usize]))
            .collect())
    }

    fn apply_scale(&mut self, object: ObjectId) -> Result<(), SceneError> {
        let obj = self.object_mut(object)?;
        if !obj.scale.is_finite() || obj.scale.cmpeq(DVec3::ZERO).any() {
            return Err(SceneError::apply_scale(format!(
                "object '{}' has non-invertible scale {:?}",
                obj.name, obj.scale
            )));
        }
        for v in &mut obj.vertices {
            *v *= obj.scale;
        }
        obj.scale = DVec3::ONE;
        Ok(())
    }

    fn delete_faces(&mut self, object: ObjectId) -> Result<(), SceneError> {
        let obj = self.object_mut(object)?;
        // Face boundary edges survive as wire edges, as in an editor's
        // faces-only delete.
        let mut seen: HashSet<(u32, u32)> =
            obj.edges.iter().map(|e| order_pair(e[0], e[1])).collect();
        let faces = std::mem::take(&mut obj.faces);
        for face in &faces {
            for i in 0..face.len() {
                let key = order_pair(face[i], face[(i + 1) % face.len()]);
                if seen.insert(key) {
                    obj.edges.push([key.0, key.1]);
                }
            }
        }
        Ok(())
    }

    fn create_mesh_object(
        &mut self,
        name: &str,
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
    ) -> Result<ObjectId, SceneError> {
        let n = vertices.len() as u32;
        for face in &faces {
            if face.len() < 3 {
                return Err(SceneError::invalid_mesh(format!(
                    "face with {} vertices",
                    face.len()
                )));
            }
            if let Some(&bad) = face.iter().find(|&&i| i >= n) {
                return Err(SceneError::invalid_mesh(format!(
                    "face references missing vertex {bad}"
                )));
            }
        }
        Ok(self.add_object(name, vertices, Vec::new(), faces))
    }

    fn ray_cast(&self, origin: DVec3, direction: DVec3) -> Option<RayHit<ObjectId>> {
        let mut nearest: Option<(f64, ObjectId)> = None;

        for (index, obj) in self.objects.iter().enumerate() {
            if obj.hidden {
                continue;
            }
            for face in &obj.faces {
                if face.len() < 3 {
                    continue;
                }
                let w0 = Self::world_vertex(obj, obj.vertices[face[0] as usize]);
                for i in 1..face.len() - 1 {
                    let w1 = Self::world_vertex(obj, obj.vertices[face[i] as usize]);
                    let w2 = Self::world_vertex(obj, obj.vertices[face[i + 1] as usize]);
                    if let Some(t) = ray_triangle_intersect(origin, direction, w0, w1, w2) {
                        if nearest.map_or(true, |(best, _)| t < best) {
                            nearest = Some((t, ObjectId(index)));
                        }
                    }
                }
            }
        }

        nearest.map(|(t, object)| RayHit {
            position: origin + direction * t,
            object,
        })
    }

    fn bounding_box_world(
        &self,
        object: ObjectId,
        include_children: bool,
    ) -> Result<Vec<DVec3>, SceneError> {
        let children = self.children_recursive(object);
        if !include_children || children.is_empty() {
            return Ok(Self::object_corners(self.object(object)?));
        }
        // Hierarchies report their children's combined extents; this is
        // what lets an empty parent carry a meaningful bounding box.
        let mut corners = Vec::with_capacity(children.len() * 8);
        for child in children {
            corners.extend(Self::object_corners(self.object(child)?));
        }
        Ok(corners)
    }

    fn set_hidden(&mut self, object: ObjectId, hidden: bool) -> Result<(), SceneError> {
        self.object_mut(object)?.hidden = hidden;
        Ok(())
    }

    fn children_recursive(&self, object: ObjectId) -> Vec<ObjectId> {
        let mut result = Vec::new();
        let mut stack = vec![object];
        while let Some(parent) = stack.pop() {
            for (index, obj) in self.objects.iter().enumerate() {
                if obj.parent == Some(parent) {
                    let id = ObjectId(index);
                    result.push(id);
                    stack.push(id);
                }
            }
        }
        result
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.selected)
            .map(|(index, _)| ObjectId(index))
            .collect()
    }

    fn location(&self, object: ObjectId) -> Result<DVec3, SceneError> {
        Ok(self.object(object)?.location)
    }

    fn translate_z(&mut self, object: ObjectId, delta: f64) -> Result<(), SceneError> {
        // Children follow their parent, as under host parenting.
        let mut ids = vec![object];
        ids.extend(self.children_recursive(object));
        for id in ids {
            self.object_mut(id)?.location.z += delta;
        }
        Ok(())
    }
}

fn order_pair(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad(scene: &mut MemScene, name: &str) -> ObjectId {
        scene.add_object(
            name,
            vec![
                DVec3::new(-1.0, -1.0, 0.0),
                DVec3::new(1.0, -1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(-1.0, 1.0, 0.0),
            ],
            vec![],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn test_edges_deduplicates_face_boundaries() {
        let mut scene = MemScene::new();
        // Two triangles sharing an edge: 5 unique edges, not 6.
        let obj = scene.add_object(
            "pair",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)],
            vec![],
            vec![vec![0, 1, 2], vec![1, 3, 2]],
        );
        assert_eq!(scene.edges(obj).unwrap().len(), 5);
    }

    #[test]
    fn test_edges_includes_wire_edges() {
        let mut scene = MemScene::new();
        let obj = scene.add_object("wire", vec![DVec3::ZERO, DVec3::Z], vec![[0, 1]], vec![]);
        let edges = scene.edges(obj).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0], (DVec3::ZERO, DVec3::Z));
    }

    #[test]
    fn test_apply_scale_bakes_vertices() {
        let mut scene = MemScene::new();
        let obj = scene.add_object("scaled", vec![DVec3::new(1.0, 2.0, 3.0)], vec![], vec![]);
        scene.set_scale(obj, DVec3::new(2.0, 2.0, 2.0)).unwrap();
        scene.apply_scale(obj).unwrap();
        assert_eq!(scene.vertices(obj).unwrap()[0], DVec3::new(2.0, 4.0, 6.0));
        scene.apply_scale(obj).unwrap(); // Now a no-op.
        assert_eq!(scene.vertices(obj).unwrap()[0], DVec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_apply_scale_rejects_zero_scale() {
        let mut scene = MemScene::new();
        let obj = scene.add_object("flat", vec![DVec3::ONE], vec![], vec![]);
        scene.set_scale(obj, DVec3::new(1.0, 0.0, 1.0)).unwrap();
        assert!(matches!(
            scene.apply_scale(obj),
            Err(SceneError::ApplyScale { .. })
        ));
    }

    #[test]
    fn test_delete_faces_keeps_edges() {
        let mut scene = MemScene::new();
        let obj = unit_quad(&mut scene, "quad");
        scene.delete_faces(obj).unwrap();
        assert!(scene.faces(obj).unwrap().is_empty());
        assert_eq!(scene.edges(obj).unwrap().len(), 4);
    }

    #[test]
    fn test_ray_cast_hits_nearest_visible() {
        let mut scene = MemScene::new();
        let floor = unit_quad(&mut scene, "floor");
        let shelf = unit_quad(&mut scene, "shelf");
        scene.set_location(shelf, DVec3::new(0.0, 0.0, 0.5)).unwrap();

        let hit = scene
            .ray_cast(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(hit.object, shelf);
        assert_relative_eq!(hit.position.z, 0.5, epsilon = 1e-12);

        scene.set_hidden(shelf, true).unwrap();
        let hit = scene
            .ray_cast(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(hit.object, floor);
    }

    #[test]
    fn test_bounding_box_prefers_children() {
        let mut scene = MemScene::new();
        let parent = scene.add_object("root", vec![], vec![], vec![]);
        let child = unit_quad(&mut scene, "child");
        scene.set_parent(child, parent).unwrap();
        scene.set_location(child, DVec3::new(0.0, 0.0, 3.0)).unwrap();

        let corners = scene.bounding_box_world(parent, true).unwrap();
        let lowest = corners.iter().map(|c| c.z).fold(f64::INFINITY, f64::min);
        assert_relative_eq!(lowest, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translate_z_moves_hierarchy() {
        let mut scene = MemScene::new();
        let parent = scene.add_object("root", vec![], vec![], vec![]);
        let child = unit_quad(&mut scene, "child");
        scene.set_parent(child, parent).unwrap();

        scene.translate_z(parent, -2.0).unwrap();
        assert_relative_eq!(scene.location(child).unwrap().z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_create_mesh_object_validates_faces() {
        let mut scene = MemScene::new();
        let result = scene.create_mesh_object("bad", vec![DVec3::ZERO], vec![vec![0, 1, 2]]);
        assert!(matches!(result, Err(SceneError::InvalidMesh { .. })));
    }

    #[test]
    fn test_unknown_object_is_reported() {
        let scene = MemScene::new();
        assert!(matches!(
            scene.location(ObjectId(3)),
            Err(SceneError::ObjectNotFound { index: 3 })
        ));
    }
}
