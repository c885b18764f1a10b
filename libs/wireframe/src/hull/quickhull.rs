//! # QuickHull
//!
//! 3D convex hull by the QuickHull algorithm of Barber, Dobkin, and
//! Huhdanpaa:
//!
//! 1. Seed a tetrahedron from extreme points
//! 2. Assign every remaining point to a face it lies outside of
//! 3. For the farthest such point, remove the faces it can see and
//!    rebuild from the horizon edges
//! 4. Repeat until no face has outside points
//!
//! Output triangles index the input slice. Points within EPSILON of an
//! earlier point are folded onto it, so indices of later duplicates
//! never appear in the output.

use std::collections::{HashMap, HashSet};

use config::constants::EPSILON;
use glam::DVec3;

/// Computes the convex hull of a point set.
///
/// Returns the hull surface as triangles of indices into `points`, with
/// outward-facing winding. Returns `None` when no 3D hull exists: fewer
/// than 4 distinct points, or all points collinear or coplanar.
pub fn convex_hull_indices(points: &[DVec3]) -> Option<Vec<[usize; 3]>> {
    if points.len() < 4 {
        return None;
    }

    let candidates = distinct_indices(points);
    if candidates.len() < 4 {
        return None;
    }

    let faces = build_initial_simplex(&candidates, points)?;
    let faces = quickhull_iterate(faces, points);

    Some(faces.into_iter().map(|f| f.vertices).collect())
}

/// A triangular face of the hull under construction.
#[derive(Debug, Clone)]
struct HullFace {
    /// Indices into the input point slice.
    vertices: [usize; 3],
    /// Outward unit normal.
    normal: DVec3,
    /// Plane offset along the normal.
    offset: f64,
    /// Candidate points strictly outside this face.
    outside: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize();
        Self {
            vertices: [v0, v1, v2],
            normal,
            offset: normal.dot(p0),
            outside: Vec::new(),
        }
    }

    fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > EPSILON
    }

    fn farthest_outside(&self, points: &[DVec3]) -> Option<usize> {
        self.outside
            .iter()
            .max_by(|&&a, &&b| {
                self.signed_distance(points[a])
                    .partial_cmp(&self.signed_distance(points[b]))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }
}

/// Indices of the first representative of every EPSILON-cluster, in
/// input order.
fn distinct_indices(points: &[DVec3]) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !kept.iter().any(|&k| (points[k] - *p).length() < EPSILON) {
            kept.push(i);
        }
    }
    kept
}

/// Seeds the hull with a tetrahedron of extreme points.
///
/// Returns `None` when the candidates are collinear or coplanar.
fn build_initial_simplex(candidates: &[usize], points: &[DVec3]) -> Option<Vec<HullFace>> {
    let mut min_axis = [candidates[0]; 3];
    let mut max_axis = [candidates[0]; 3];
    for &i in candidates {
        for axis in 0..3 {
            if points[i][axis] < points[min_axis[axis]][axis] {
                min_axis[axis] = i;
            }
            if points[i][axis] > points[max_axis[axis]][axis] {
                max_axis[axis] = i;
            }
        }
    }

    let extremes = [
        min_axis[0], max_axis[0], min_axis[1], max_axis[1], min_axis[2], max_axis[2],
    ];
    let (p0, p1) = farthest_pair(&extremes, points);
    let p2 = farthest_from_line(p0, p1, candidates, points)?;
    let p3 = farthest_from_plane(p0, p1, p2, candidates, points)?;

    let centroid = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        face_outward(p0, p1, p2, centroid, points),
        face_outward(p0, p2, p3, centroid, points),
        face_outward(p0, p3, p1, centroid, points),
        face_outward(p1, p3, p2, centroid, points),
    ];

    let used: HashSet<usize> = [p0, p1, p2, p3].into_iter().collect();
    for &idx in candidates.iter().filter(|i| !used.contains(i)) {
        let point = points[idx];
        for face in &mut faces {
            if face.is_outside(point) {
                face.outside.push(idx);
                break;
            }
        }
    }

    Some(faces)
}

fn farthest_pair(indices: &[usize], points: &[DVec3]) -> (usize, usize) {
    let mut best = (indices[0], indices[1]);
    let mut best_dist = 0.0;
    for (n, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(n + 1) {
            let dist = (points[a] - points[b]).length_squared();
            if dist > best_dist {
                best_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn farthest_from_line(
    p0: usize,
    p1: usize,
    candidates: &[usize],
    points: &[DVec3],
) -> Option<usize> {
    let dir = (points[p1] - points[p0]).normalize();
    let mut best = None;
    let mut best_dist = EPSILON;
    for &i in candidates {
        if i == p0 || i == p1 {
            continue;
        }
        let v = points[i] - points[p0];
        let dist = (v - v.dot(dir) * dir).length();
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    best
}

fn farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    candidates: &[usize],
    points: &[DVec3],
) -> Option<usize> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize();
    let mut best = None;
    let mut best_dist = EPSILON;
    for &i in candidates {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(points[i] - points[p0]).abs();
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    best
}

/// Builds a face whose normal points away from the hull centroid.
fn face_outward(v0: usize, v1: usize, v2: usize, centroid: DVec3, points: &[DVec3]) -> HullFace {
    let face = HullFace::new(v0, v1, v2, points);
    let face_center = (points[v0] + points[v1] + points[v2]) / 3.0;
    if face.normal.dot(centroid - face_center) > 0.0 {
        HullFace::new(v0, v2, v1, points)
    } else {
        face
    }
}

fn quickhull_iterate(mut faces: Vec<HullFace>, points: &[DVec3]) -> Vec<HullFace> {
    // Each pass consumes at least one candidate; the bound guards
    // against a numerical cycle.
    let max_iterations = points.len() * 2;

    for _ in 0..max_iterations {
        let Some(face_idx) = faces.iter().position(|f| !f.outside.is_empty()) else {
            break;
        };
        let Some(apex) = faces[face_idx].farthest_outside(points) else {
            break;
        };

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(points[apex]))
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            faces[face_idx].outside.retain(|&p| p != apex);
            continue;
        }

        let horizon = horizon_edges(&faces, &visible);

        let mut orphaned: Vec<usize> = Vec::new();
        for &idx in &visible {
            orphaned.extend(&faces[idx].outside);
        }
        orphaned.retain(|&p| p != apex);

        let mut doomed = visible;
        doomed.sort_by(|a, b| b.cmp(a));
        for idx in doomed {
            faces.swap_remove(idx);
        }

        let centroid = hull_centroid(&faces, points);
        for (e0, e1) in horizon {
            faces.push(face_outward(e0, e1, apex, centroid, points));
        }

        for &idx in &orphaned {
            let point = points[idx];
            for face in &mut faces {
                if face.is_outside(point) {
                    face.outside.push(idx);
                    break;
                }
            }
        }
    }

    faces
}

/// Edges on the boundary of the visible region: those belonging to
/// exactly one visible face.
fn horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    for &idx in visible {
        let v = faces[idx].vertices;
        for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_count.entry(key).or_insert(0) += 1;
        }
    }

    let mut horizon = Vec::new();
    for &idx in visible {
        let v = faces[idx].vertices;
        for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            if edge_count[&key] == 1 {
                // Keep winding from the visible side.
                horizon.push((a, b));
            }
        }
    }
    horizon
}

fn hull_centroid(faces: &[HullFace], points: &[DVec3]) -> DVec3 {
    let mut sum = DVec3::ZERO;
    let mut seen: HashSet<usize> = HashSet::new();
    for face in faces {
        for &v in &face.vertices {
            if seen.insert(v) {
                sum += points[v];
            }
        }
    }
    if seen.is_empty() {
        DVec3::ZERO
    } else {
        sum / seen.len() as f64
    }
}
