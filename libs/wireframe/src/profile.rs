//! # Profile Generator
//!
//! Produces the 2D cross-section vertex loop that gets extruded along
//! every edge. Profiles live in the local XY plane (z = 0 before any
//! transform) with a counter-clockwise winding.

use std::fmt;
use std::str::FromStr;

use config::constants::MIN_SEGMENTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::WireframeError;

/// Cross-section shape of the extruded wireframe profile.
///
/// A closed set: dispatch is an exhaustive match, and unknown tags can
/// only enter through [`FromStr`] at the configuration boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileShape {
    /// Axis-aligned square, half-width `size`.
    Square,
    /// Circle of radius `size`, tessellated into `segments` points.
    Round,
    /// Fixed isoceles triangle of half-width `size`.
    Triangle,
}

impl fmt::Display for ProfileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileShape::Square => write!(f, "SQUARE"),
            ProfileShape::Round => write!(f, "ROUND"),
            ProfileShape::Triangle => write!(f, "TRIANGLE"),
        }
    }
}

impl FromStr for ProfileShape {
    type Err = WireframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("SQUARE") {
            Ok(ProfileShape::Square)
        } else if s.eq_ignore_ascii_case("ROUND") {
            Ok(ProfileShape::Round)
        } else if s.eq_ignore_ascii_case("TRIANGLE") {
            Ok(ProfileShape::Triangle)
        } else {
            Err(WireframeError::unsupported_shape(s))
        }
    }
}

/// An ordered, cyclic loop of 2D points forming the cross-section.
///
/// Immutable once generated for a given (shape, size, segments) tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Generates the profile loop for a shape.
    ///
    /// `size` is the half-width (square/triangle) or radius (round) and
    /// must be positive. `segments` controls the round tessellation and
    /// is ignored for the fixed-count shapes.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive size, or for a round
    /// profile with fewer than 3 segments.
    pub fn generate(shape: ProfileShape, size: f64, segments: u32) -> Result<Self, WireframeError> {
        if !(size > 0.0) {
            return Err(WireframeError::invalid_parameter(format!(
                "profile size must be positive, got {size}"
            )));
        }

        let points = match shape {
            ProfileShape::Square => vec![
                DVec2::new(-size, -size),
                DVec2::new(size, -size),
                DVec2::new(size, size),
                DVec2::new(-size, size),
            ],
            ProfileShape::Round => {
                if segments < MIN_SEGMENTS {
                    return Err(WireframeError::invalid_parameter(format!(
                        "round profile needs at least {MIN_SEGMENTS} segments, got {segments}"
                    )));
                }
                (0..segments)
                    .map(|i| {
                        let theta = 2.0 * std::f64::consts::PI * f64::from(i) / f64::from(segments);
                        DVec2::new(size * theta.cos(), size * theta.sin())
                    })
                    .collect()
            }
            ProfileShape::Triangle => vec![
                DVec2::new(0.0, size),
                DVec2::new(-size, -size),
                DVec2::new(size, -size),
            ],
        };

        Ok(Self { points })
    }

    /// The profile points, counter-clockwise.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of points in the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a generated profile; kept for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_corners() {
        let p = Profile::generate(ProfileShape::Square, 0.05, 12).unwrap();
        assert_eq!(
            p.points(),
            &[
                DVec2::new(-0.05, -0.05),
                DVec2::new(0.05, -0.05),
                DVec2::new(0.05, 0.05),
                DVec2::new(-0.05, 0.05),
            ]
        );
    }

    #[test]
    fn test_round_points_on_circle() {
        let p = Profile::generate(ProfileShape::Round, 2.0, 16).unwrap();
        assert_eq!(p.len(), 16);
        for point in p.points() {
            assert_relative_eq!(point.length(), 2.0, epsilon = 1e-12);
        }
        // Starts at angle 0, increases counter-clockwise.
        assert_relative_eq!(p.points()[0].x, 2.0, epsilon = 1e-12);
        assert!(p.points()[1].y > 0.0);
    }

    #[test]
    fn test_triangle_corners() {
        let p = Profile::generate(ProfileShape::Triangle, 1.0, 12).unwrap();
        assert_eq!(
            p.points(),
            &[
                DVec2::new(0.0, 1.0),
                DVec2::new(-1.0, -1.0),
                DVec2::new(1.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_segments_ignored_for_fixed_shapes() {
        // The segment count only matters for round profiles.
        let p = Profile::generate(ProfileShape::Square, 1.0, 0).unwrap();
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(Profile::generate(ProfileShape::Square, 0.0, 12).is_err());
        assert!(Profile::generate(ProfileShape::Round, 1.0, 2).is_err());
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("ROUND".parse::<ProfileShape>().unwrap(), ProfileShape::Round);
        assert_eq!("square".parse::<ProfileShape>().unwrap(), ProfileShape::Square);
        assert!(matches!(
            "HEXAGON".parse::<ProfileShape>(),
            Err(WireframeError::UnsupportedShape { .. })
        ));
    }
}
