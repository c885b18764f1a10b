//! Ray/triangle intersection (Möller–Trumbore).

use config::constants::EPSILON;
use glam::DVec3;

/// Returns the distance `t` along the ray at which it crosses the
/// triangle, or `None` when the ray misses or runs parallel to it.
///
/// `direction` does not need to be normalized; `t` is expressed in
/// multiples of its length. Hits behind the origin are rejected.
pub fn ray_triangle_intersect(
    origin: DVec3,
    direction: DVec3,
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = direction.cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < EPSILON {
        // Ray parallel to the triangle plane.
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = origin - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_triangle() {
        let t = ray_triangle_intersect(
            DVec3::new(0.2, 0.2, 1.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
        )
        .unwrap();
        assert_relative_eq!(t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ray_misses_triangle() {
        let t = ray_triangle_intersect(
            DVec3::new(2.0, 2.0, 1.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_parallel_to_triangle() {
        let t = ray_triangle_intersect(
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::X,
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_hit_behind_origin_rejected() {
        let t = ray_triangle_intersect(
            DVec3::new(0.2, 0.2, -1.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
        );
        assert!(t.is_none());
    }
}
