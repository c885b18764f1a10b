//! Centralized configuration values shared across the LazyTools crates.
//!
//! Each public item in this module documents its purpose and provides a
//! minimal usage example so that downstream crates can remain declarative
//! and avoid scattering literals.

/// Numerical tolerance used by geometry kernels.
///
/// Below this threshold vectors are considered zero-length, points
/// coincident, and hull faces degenerate.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-10;

/// Default half-width (square/triangle) or radius (round) of the
/// extruded wireframe profile, in world units.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PROFILE_SIZE;
/// assert!(DEFAULT_PROFILE_SIZE > 0.0);
/// ```
pub const DEFAULT_PROFILE_SIZE: f64 = 0.05;

/// Default segment count for round profiles.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 3);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 12;

/// Minimum segment count for round profiles; fewer cannot form a polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_SEGMENTS;
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Default distance below which generated vertices are welded together,
/// closing the seams between independently generated prisms.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MERGE_TOLERANCE;
/// assert!(DEFAULT_MERGE_TOLERANCE > 0.0);
/// ```
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1.0e-4;

/// Minimum number of aggregate points required before a corner junction
/// can be capped with a convex hull. Corners with fewer points are left
/// open.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Default minimum distance an object must travel before the floor-drop
/// tool applies the movement.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MOVE_THRESHOLD;
/// assert!(DEFAULT_MOVE_THRESHOLD > 0.0);
/// ```
pub const DEFAULT_MOVE_THRESHOLD: f64 = 0.01;

/// Vertical lift applied to the floor-drop ray origin above the
/// hierarchy's lowest point, so the ray does not start embedded in
/// coplanar geometry.
///
/// # Examples
/// ```
/// use config::constants::RAY_ORIGIN_OFFSET;
/// assert!(RAY_ORIGIN_OFFSET > 0.0);
/// ```
pub const RAY_ORIGIN_OFFSET: f64 = 0.01;

#[cfg(test)]
mod tests;
