//! # Edge Frame Solver
//!
//! For one mesh edge, computes the rotation aligning the profile's rest
//! orientation (normal +Z) with the edge direction and instantiates the
//! profile at both endpoints. The two instances are coplanar rings
//! perpendicular to the edge, so connecting them with lateral faces
//! yields a correct prism.

use config::constants::EPSILON;
use glam::{DQuat, DVec3};

use crate::error::WireframeError;
use crate::profile::Profile;

/// A profile transformed into 3D space at one edge endpoint.
#[derive(Debug, Clone)]
pub struct ProfileInstance {
    /// The transformed profile points.
    pub points: Vec<DVec3>,
    /// The endpoint (corner) this instance is centered on.
    pub corner: DVec3,
}

/// Instantiates the profile at both endpoints of an edge.
///
/// The transform applied to every profile point is translate-after-
/// rotate: the minimal rotation taking the local +Z axis onto the edge
/// direction, then the endpoint position.
///
/// # Errors
///
/// `DegenerateEdge` when the endpoints coincide and no direction exists.
pub fn solve(
    v1: DVec3,
    v2: DVec3,
    profile: &Profile,
) -> Result<(ProfileInstance, ProfileInstance), WireframeError> {
    let edge = v2 - v1;
    let length = edge.length();
    if length < EPSILON {
        return Err(WireframeError::DegenerateEdge { position: v1 });
    }
    let direction = edge / length;
    let rotation = DQuat::from_rotation_arc(DVec3::Z, direction);

    let rotated: Vec<DVec3> = profile
        .points()
        .iter()
        .map(|p| rotation * DVec3::new(p.x, p.y, 0.0))
        .collect();

    let at = |corner: DVec3| ProfileInstance {
        points: rotated.iter().map(|&p| p + corner).collect(),
        corner,
    };

    Ok((at(v1), at(v2)))
}
