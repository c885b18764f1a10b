//! # Prism Builder
//!
//! Connects the two profile instances of an edge with lateral quad
//! faces. Vertices are never shared across edges at this stage; seams
//! are closed later by welding.

use crate::frame::ProfileInstance;
use crate::mesh::Mesh;

/// Appends one edge's prism to the mesh: 2N new vertices and N lateral
/// quads for an N-point profile.
///
/// Face winding is `[start[i], end[i], end[i+1], start[i+1]]`, which is
/// consistently outward for a counter-clockwise profile.
///
/// Returns the vertex-index rings at the start and end corner, for
/// corner aggregation.
pub fn build_prism(
    mesh: &mut Mesh,
    start: &ProfileInstance,
    end: &ProfileInstance,
) -> (Vec<u32>, Vec<u32>) {
    debug_assert_eq!(start.points.len(), end.points.len());

    let start_ring: Vec<u32> = start.points.iter().map(|&p| mesh.add_vertex(p)).collect();
    let end_ring: Vec<u32> = end.points.iter().map(|&p| mesh.add_vertex(p)).collect();

    let n = start_ring.len();
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_face(vec![start_ring[i], end_ring[i], end_ring[j], start_ring[j]]);
    }

    (start_ring, end_ring)
}
