//! # Build Driver
//!
//! Drives the full wireframe pipeline: pull edges from the host object,
//! solve a frame and build a prism per edge, aggregate profile rings per
//! corner, close multi-edge corners with hull caps, weld, then commit
//! the result to the scene as a new object.
//!
//! The scene is only written once the mesh is complete, so a failed
//! build leaves the host untouched apart from the scale normalization.

use config::constants::{DEFAULT_MERGE_TOLERANCE, DEFAULT_PROFILE_SIZE, DEFAULT_SEGMENTS};
use glam::DVec3;
use lazytools_scene::Scene;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::corner::CornerMap;
use crate::error::WireframeError;
use crate::frame;
use crate::junction;
use crate::mesh::Mesh;
use crate::prism;
use crate::profile::{Profile, ProfileShape};
use crate::weld::weld;

/// Name given to the generated scene object.
const OUTPUT_OBJECT_NAME: &str = "ProfiledObject";

/// Parameters of a wireframe build.
///
/// # Example
///
/// ```rust
/// use lazytools_wireframe::{ProfileShape, WireframeParams};
///
/// let params = WireframeParams {
///     shape: ProfileShape::Round,
///     segments: 16,
///     ..WireframeParams::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeParams {
    /// Cross-section shape extruded along every edge.
    pub shape: ProfileShape,
    /// Half-width (square/triangle) or radius (round) of the profile.
    pub size: f64,
    /// Tessellation of round profiles; ignored for the fixed shapes.
    pub segments: u32,
    /// Whether to strip the faces of the input object, leaving only its
    /// edge cage next to the generated wireframe.
    pub delete_original_faces: bool,
    /// Distance under which output vertices are merged.
    pub merge_tolerance: f64,
}

impl Default for WireframeParams {
    fn default() -> Self {
        Self {
            shape: ProfileShape::Square,
            size: DEFAULT_PROFILE_SIZE,
            segments: DEFAULT_SEGMENTS,
            delete_original_faces: true,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
        }
    }
}

impl WireframeParams {
    /// Validates the parameter set without running a build.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive size or tolerance, or too
    /// few segments for a round profile.
    pub fn validate(&self) -> Result<(), WireframeError> {
        Profile::generate(self.shape, self.size, self.segments)?;
        if !(self.merge_tolerance > 0.0) || !self.merge_tolerance.is_finite() {
            return Err(WireframeError::invalid_parameter(format!(
                "merge tolerance must be positive and finite, got {}",
                self.merge_tolerance
            )));
        }
        Ok(())
    }
}

/// Generates the wireframe mesh for a set of edges.
///
/// Zero-length edges are skipped with a warning rather than aborting
/// the build; an input made entirely of them yields an empty mesh.
///
/// # Errors
///
/// `InvalidParameter` / `UnsupportedShape` when the parameters do not
/// describe a valid profile.
pub fn generate_wireframe(
    edges: &[(DVec3, DVec3)],
    params: &WireframeParams,
) -> Result<Mesh, WireframeError> {
    params.validate()?;
    let profile = Profile::generate(params.shape, params.size, params.segments)?;

    let mut mesh = Mesh::with_capacity(edges.len() * 2 * profile.len(), edges.len() * profile.len());
    let mut corners = CornerMap::new();
    let mut skipped = 0usize;

    for &(v1, v2) in edges {
        let (start, end) = match frame::solve(v1, v2, &profile) {
            Ok(instances) => instances,
            Err(WireframeError::DegenerateEdge { position }) => {
                warn!(
                    "skipping zero-length edge at ({}, {}, {})",
                    position.x, position.y, position.z
                );
                skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        let (start_ring, end_ring) = prism::build_prism(&mut mesh, &start, &end);
        corners.record(start.corner, start_ring);
        corners.record(end.corner, end_ring);
    }

    let mut caps = 0usize;
    for (key, rings) in corners.iter() {
        // A lone edge end is a planar ring; only junctions get capped.
        if rings.len() > 1 {
            let added = junction::close_corner(&mut mesh, rings);
            if added == 0 {
                let p = key.position();
                debug!("junction at ({}, {}, {}) left uncapped", p.x, p.y, p.z);
            }
            caps += added;
        }
    }

    let welded = weld(&mesh, params.merge_tolerance)?;
    info!(
        "wireframe build: {} edges ({} skipped), {} corners, {} cap faces, {} vertices after weld",
        edges.len(),
        skipped,
        corners.len(),
        caps,
        welded.vertex_count()
    );
    Ok(welded)
}

/// Replaces every edge of a scene object with an extruded profile prism
/// and commits the result as a new object.
///
/// The input object's scale is baked first so the profile size is in
/// world units. With `delete_original_faces` set, the input is reduced
/// to its edge cage after the build succeeds.
///
/// # Errors
///
/// `ScaleNormalization` when the host cannot bake the object's scale,
/// parameter errors from [`generate_wireframe`], and `Scene` errors
/// from the host while reading or writing objects.
pub fn extrude_profiles_along_edges<S: Scene>(
    scene: &mut S,
    object: S::ObjectId,
    params: &WireframeParams,
) -> Result<S::ObjectId, WireframeError> {
    scene
        .apply_scale(object)
        .map_err(|err| WireframeError::ScaleNormalization {
            message: err.to_string(),
        })?;

    let edges = scene.edges(object)?;
    let mesh = generate_wireframe(&edges, params)?;

    if params.delete_original_faces {
        scene.delete_faces(object)?;
    }

    let (vertices, faces) = mesh.into_buffers();
    let created = scene.create_mesh_object(OUTPUT_OBJECT_NAME, vertices, faces)?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazytools_scene::MemScene;

    #[test]
    fn test_single_vertical_edge() {
        let edges = [(DVec3::ZERO, DVec3::Z)];
        let mesh = generate_wireframe(&edges, &WireframeParams::default()).unwrap();

        // One square prism: 8 vertices, 4 lateral quads, no caps, and
        // nothing close enough to weld.
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 4);
        assert!(mesh.faces().iter().all(|f| f.len() == 4));
        assert!(mesh.validate());

        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-0.05, -0.05, 0.0));
        assert_eq!(max, DVec3::new(0.05, 0.05, 1.0));
    }

    #[test]
    fn test_tripod_corner_is_capped() {
        // Three edges meeting at the origin, round profile.
        let edges = [
            (DVec3::ZERO, DVec3::X),
            (DVec3::ZERO, DVec3::Y),
            (DVec3::ZERO, DVec3::Z),
        ];
        let params = WireframeParams {
            shape: ProfileShape::Round,
            ..WireframeParams::default()
        };
        let mesh = generate_wireframe(&edges, &params).unwrap();

        // 12 lateral quads per edge, plus triangular caps at the shared
        // corner. The far endpoints stay open.
        let quads = mesh.faces().iter().filter(|f| f.len() == 4).count();
        let triangles: Vec<_> = mesh.faces().iter().filter(|f| f.len() == 3).collect();
        assert_eq!(quads, 36);
        assert!(!triangles.is_empty());
        assert!(mesh.validate());

        // Every cap vertex sits on a profile ring at the origin.
        for face in triangles {
            for &i in face {
                assert!(mesh.vertex(i).length() < 0.5);
            }
        }
    }

    #[test]
    fn test_zero_length_edges_are_skipped() {
        let edges = [
            (DVec3::ZERO, DVec3::ZERO),
            (DVec3::new(2.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 1.0)),
        ];
        let mesh = generate_wireframe(&edges, &WireframeParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn test_all_degenerate_edges_yield_empty_mesh() {
        let edges = [(DVec3::X, DVec3::X)];
        let mesh = generate_wireframe(&edges, &WireframeParams::default()).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_params_validation() {
        let params = WireframeParams {
            size: -1.0,
            ..WireframeParams::default()
        };
        assert!(params.validate().is_err());

        let params = WireframeParams {
            shape: ProfileShape::Round,
            segments: 2,
            ..WireframeParams::default()
        };
        assert!(params.validate().is_err());

        let params = WireframeParams {
            merge_tolerance: 0.0,
            ..WireframeParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: WireframeParams = serde_json::from_str(r#"{"shape": "ROUND"}"#).unwrap();
        assert_eq!(params.shape, ProfileShape::Round);
        assert_eq!(params.segments, DEFAULT_SEGMENTS);
        assert!(params.delete_original_faces);
    }

    #[test]
    fn test_scene_build_creates_object() {
        let mut scene = MemScene::new();
        let source = scene.add_object(
            "frame",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![],
            vec![vec![0, 1, 2]],
        );

        let created =
            extrude_profiles_along_edges(&mut scene, source, &WireframeParams::default()).unwrap();

        assert_eq!(scene.name(created).unwrap(), OUTPUT_OBJECT_NAME);
        assert!(!scene.faces(created).unwrap().is_empty());
        // delete_original_faces leaves the source as an edge cage.
        assert!(scene.faces(source).unwrap().is_empty());
        assert_eq!(scene.edges(source).unwrap().len(), 3);
    }

    #[test]
    fn test_scene_build_bakes_scale() {
        let mut scene = MemScene::new();
        let source = scene.add_object(
            "beam",
            vec![DVec3::ZERO, DVec3::Z],
            vec![[0, 1]],
            vec![],
        );
        scene.set_scale(source, DVec3::splat(2.0)).unwrap();

        let params = WireframeParams {
            delete_original_faces: false,
            ..WireframeParams::default()
        };
        let created = extrude_profiles_along_edges(&mut scene, source, &params).unwrap();

        let max_z = scene
            .vertices(created)
            .unwrap()
            .iter()
            .map(|v| v.z)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((max_z - 2.0).abs() < 1e-12);
    }
}
