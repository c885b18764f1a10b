//! # Vertex Welder
//!
//! Global merge of vertices closer than a tolerance, closing the seams
//! between prisms that meet at a corner. A spatial hash with cells the
//! size of the tolerance keeps the pass linear: a vertex can only merge
//! with candidates in its own or an adjacent cell.
//!
//! The earliest vertex of each cluster survives, so surviving vertices
//! are pairwise farther apart than the tolerance and a second weld is a
//! no-op.

use std::collections::HashMap;

use glam::DVec3;

use crate::error::WireframeError;
use crate::mesh::Mesh;

/// Merges all vertices within `tolerance` of each other and rewrites
/// faces accordingly.
///
/// Faces whose loop collapses below 3 distinct vertices are dropped.
/// So are faces whose loop keeps 3 or more distinct vertices but
/// pinches into a non-adjacent repeat (a bowtie): every output face is
/// a simple loop, which is stronger than only dropping the fully
/// collapsed ones.
///
/// # Errors
///
/// `InvalidParameter` when the tolerance is not a positive finite
/// number.
pub fn weld(mesh: &Mesh, tolerance: f64) -> Result<Mesh, WireframeError> {
    if !(tolerance > 0.0) || !tolerance.is_finite() {
        return Err(WireframeError::invalid_parameter(format!(
            "merge tolerance must be positive and finite, got {tolerance}"
        )));
    }

    let cell_of = |p: DVec3| -> (i64, i64, i64) {
        (
            (p.x / tolerance).floor() as i64,
            (p.y / tolerance).floor() as i64,
            (p.z / tolerance).floor() as i64,
        )
    };

    // Representative vertex index per occupied cell, in the output mesh.
    let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertex_count());
    let mut welded = Mesh::with_capacity(mesh.vertex_count(), mesh.face_count());

    for &p in mesh.vertices() {
        let (cx, cy, cz) = cell_of(p);
        let mut target = None;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &rep in bucket {
                        if (welded.vertex(rep) - p).length() <= tolerance {
                            target = Some(rep);
                            break 'search;
                        }
                    }
                }
            }
        }

        let index = match target {
            Some(rep) => rep,
            None => {
                let index = welded.add_vertex(p);
                grid.entry((cx, cy, cz)).or_default().push(index);
                index
            }
        };
        remap.push(index);
    }

    'faces: for face in mesh.faces() {
        let mut loop_indices: Vec<u32> = Vec::with_capacity(face.len());
        for &i in face {
            let mapped = remap[i as usize];
            if loop_indices.last() != Some(&mapped) {
                loop_indices.push(mapped);
            }
        }
        while loop_indices.len() > 1 && loop_indices.first() == loop_indices.last() {
            loop_indices.pop();
        }
        if loop_indices.len() < 3 {
            continue;
        }
        // A non-adjacent repeat means the loop pinched into a bowtie.
        for (n, &i) in loop_indices.iter().enumerate() {
            if loop_indices[n + 1..].contains(&i) {
                continue 'faces;
            }
        }
        welded.add_face(loop_indices);
    }

    Ok(welded)
}
