//! # Junction Closer
//!
//! Caps the open prism ends meeting at a corner with the convex hull of
//! their profile vertices. The hull is computed over vertices already
//! in the mesh, and its triangles reference those same vertices, so
//! closing a corner adds faces but never geometry.

use config::constants::MIN_HULL_POINTS;
use glam::DVec3;
use log::debug;

use crate::hull::convex_hull_indices;
use crate::mesh::Mesh;

/// Closes one corner by hulling the profile rings recorded there.
///
/// `rings` holds, per incident edge, the mesh vertex indices of the
/// profile instance at this corner. Corners with fewer than
/// [`MIN_HULL_POINTS`] vertices in total are left open, as are corners
/// whose vertices admit no 3D hull (a single edge's planar ring, for
/// instance). Returns the number of cap faces added.
pub fn close_corner(mesh: &mut Mesh, rings: &[Vec<u32>]) -> usize {
    let indices: Vec<u32> = rings.iter().flatten().copied().collect();
    if indices.len() < MIN_HULL_POINTS {
        return 0;
    }

    let positions: Vec<DVec3> = indices.iter().map(|&i| mesh.vertex(i)).collect();
    let Some(triangles) = convex_hull_indices(&positions) else {
        debug!("corner with {} vertices is flat, leaving it open", indices.len());
        return 0;
    };

    let added = triangles.len();
    for [a, b, c] in triangles {
        mesh.add_face(vec![indices[a], indices[b], indices[c]]);
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame;
    use crate::prism;
    use crate::profile::{Profile, ProfileShape};

    #[test]
    fn test_single_ring_stays_open() {
        // One edge's profile ring is planar; no cap can be built.
        let profile = Profile::generate(ProfileShape::Square, 0.05, 12).unwrap();
        let (start, end) = frame::solve(DVec3::ZERO, DVec3::Z, &profile).unwrap();
        let mut mesh = Mesh::new();
        let (start_ring, _) = prism::build_prism(&mut mesh, &start, &end);

        let faces_before = mesh.face_count();
        assert_eq!(close_corner(&mut mesh, &[start_ring]), 0);
        assert_eq!(mesh.face_count(), faces_before);
    }

    #[test]
    fn test_two_edge_corner_gets_capped() {
        let profile = Profile::generate(ProfileShape::Square, 0.05, 12).unwrap();
        let corner = DVec3::ZERO;
        let mut mesh = Mesh::new();
        let mut rings = Vec::new();
        for tip in [DVec3::X, DVec3::Z] {
            let (start, end) = frame::solve(corner, tip, &profile).unwrap();
            let (start_ring, _) = prism::build_prism(&mut mesh, &start, &end);
            rings.push(start_ring);
        }

        let vertices_before = mesh.vertex_count();
        let added = close_corner(&mut mesh, &rings);
        assert!(added > 0);
        // Caps only reference existing vertices.
        assert_eq!(mesh.vertex_count(), vertices_before);
        assert!(mesh.validate());
        for face in &mesh.faces()[mesh.face_count() - added..] {
            assert_eq!(face.len(), 3);
        }
    }

    #[test]
    fn test_too_few_points_left_open() {
        let mut mesh = Mesh::new();
        let ring: Vec<u32> = [DVec3::ZERO, DVec3::X, DVec3::Y]
            .into_iter()
            .map(|p| mesh.add_vertex(p))
            .collect();
        assert_eq!(close_corner(&mut mesh, &[ring]), 0);
    }
}
