//! # Drop Logic
//!
//! Drops one object, together with its child hierarchy, onto the first
//! geometry below it. The ray starts just under the hierarchy's lowest
//! bounding-box point and travels straight down; the object itself, its
//! children and the other selected objects are hidden for the duration
//! of the cast so they cannot catch the ray.

use config::constants::{DEFAULT_MOVE_THRESHOLD, RAY_ORIGIN_OFFSET};
use glam::DVec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use lazytools_scene::Scene;

use crate::error::FloorDropError;

/// Parameters of a drop operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorDropParams {
    /// Drop to [`custom_floor`](Self::custom_floor) when no geometry is
    /// found below.
    pub fallback_to_floor: bool,
    /// Z level of the user-defined floor used by the fallback.
    pub custom_floor: f64,
    /// Minimum distance a raycast hit must imply before the object is
    /// actually moved.
    pub move_threshold: f64,
}

impl Default for FloorDropParams {
    fn default() -> Self {
        Self {
            fallback_to_floor: false,
            custom_floor: 0.0,
            move_threshold: DEFAULT_MOVE_THRESHOLD,
        }
    }
}

impl FloorDropParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the threshold is negative or any value is
    /// not finite.
    pub fn validate(&self) -> Result<(), FloorDropError> {
        if !(self.move_threshold >= 0.0) || !self.move_threshold.is_finite() {
            return Err(FloorDropError::invalid_parameter(format!(
                "move threshold must be non-negative and finite, got {}",
                self.move_threshold
            )));
        }
        if !self.custom_floor.is_finite() {
            return Err(FloorDropError::invalid_parameter(format!(
                "custom floor must be finite, got {}",
                self.custom_floor
            )));
        }
        Ok(())
    }
}

/// What a drop did to the object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Geometry was hit and the object moved by this (signed) Z delta.
    Moved(f64),
    /// Geometry was hit but the implied move was within the threshold;
    /// the object did not move.
    BelowThreshold(f64),
    /// Nothing below; the fallback floor was applied with this Z delta.
    Floored(f64),
    /// Nothing below and no fallback requested; the object did not move.
    NoHit,
}

/// Drops one object onto the geometry below it.
///
/// The bounding box covers the whole child hierarchy, so an empty
/// parent with mesh children lands on its children's lowest point.
///
/// # Errors
///
/// Parameter validation errors, `NoBoundingBox` when the host reports
/// no extents for the hierarchy, and `Scene` errors from the host.
pub fn drop_to_geometry_below<S: Scene>(
    scene: &mut S,
    object: S::ObjectId,
    params: &FloorDropParams,
) -> Result<DropOutcome, FloorDropError> {
    params.validate()?;
    debug!("dropping object {object:?}");

    // Everything that must not catch the ray: the object, its children,
    // and the other members of the selection.
    let mut shielded = vec![object];
    shielded.extend(scene.children_recursive(object));
    shielded.extend(scene.selected_objects().into_iter().filter(|&o| o != object));

    with_objects_hidden(scene, &shielded, |scene| {
        let corners = scene.bounding_box_world(object, true)?;
        let lowest_z = corners
            .iter()
            .map(|c| c.z)
            .min_by(|a, b| a.total_cmp(b))
            .ok_or(FloorDropError::NoBoundingBox)?;

        let location = scene.location(object)?;
        let origin = DVec3::new(location.x, location.y, lowest_z + RAY_ORIGIN_OFFSET);

        match scene.ray_cast(origin, DVec3::NEG_Z) {
            Some(hit) => {
                let delta = hit.position.z - lowest_z;
                if delta.abs() > params.move_threshold {
                    scene.translate_z(object, delta)?;
                    info!("object {object:?} moved by {delta}");
                    Ok(DropOutcome::Moved(delta))
                } else {
                    debug!("object {object:?} within threshold, not moved");
                    Ok(DropOutcome::BelowThreshold(delta))
                }
            }
            None if params.fallback_to_floor => {
                let delta = params.custom_floor - lowest_z;
                scene.translate_z(object, delta)?;
                info!("object {object:?} placed on floor z={}", params.custom_floor);
                Ok(DropOutcome::Floored(delta))
            }
            None => {
                debug!("object {object:?}: nothing below, no fallback");
                Ok(DropOutcome::NoHit)
            }
        }
    })
}

/// Drops every selected object in turn.
///
/// Objects are processed in selection order; each drop sees the scene
/// as left by the previous one, so stacked selections settle onto each
/// other the way repeated single drops would.
///
/// # Errors
///
/// The first error encountered aborts the loop.
pub fn drop_selected_objects<S: Scene>(
    scene: &mut S,
    params: &FloorDropParams,
) -> Result<Vec<(S::ObjectId, DropOutcome)>, FloorDropError> {
    let selection = scene.selected_objects();
    let mut outcomes = Vec::with_capacity(selection.len());
    for object in selection {
        let outcome = drop_to_geometry_below(scene, object, params)?;
        outcomes.push((object, outcome));
    }
    Ok(outcomes)
}

/// Runs `body` with the given objects hidden, restoring visibility on
/// every exit path.
fn with_objects_hidden<S: Scene, T>(
    scene: &mut S,
    objects: &[S::ObjectId],
    body: impl FnOnce(&mut S) -> Result<T, FloorDropError>,
) -> Result<T, FloorDropError> {
    for &o in objects {
        scene.set_hidden(o, true)?;
    }

    let result = body(scene);

    let mut restore_failure = None;
    for &o in objects {
        if let Err(err) = scene.set_hidden(o, false) {
            restore_failure.get_or_insert(err);
        }
    }
    match (result, restore_failure) {
        (Ok(_), Some(err)) => Err(err.into()),
        (result, _) => result,
    }
}
