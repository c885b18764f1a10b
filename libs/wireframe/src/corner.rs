//! # Corner Aggregator
//!
//! Groups, per original mesh vertex, the profile rings contributed by
//! every edge touching that vertex. Corners are keyed by the exact
//! floating-point representation of the endpoint coordinate: two
//! endpoints collide only when their coordinates are bit-identical.
//! Shared vertices that drifted apart upstream will therefore occupy
//! separate corners and stay uncapped. The welding pass still closes
//! seams within the merge tolerance.

use std::collections::HashMap;

use glam::DVec3;

/// Hashable corner identity derived from an endpoint coordinate.
///
/// Uses the raw bit patterns of the three components, with negative
/// zero normalized so that `-0.0` and `0.0` (which compare equal as
/// floats) share a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerKey([u64; 3]);

impl CornerKey {
    /// Builds the key for an endpoint position.
    pub fn new(position: DVec3) -> Self {
        fn bits(v: f64) -> u64 {
            // -0.0 + 0.0 == +0.0 under IEEE 754.
            (v + 0.0).to_bits()
        }
        Self([bits(position.x), bits(position.y), bits(position.z)])
    }

    /// Recovers the corner position the key was built from.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            f64::from_bits(self.0[0]),
            f64::from_bits(self.0[1]),
            f64::from_bits(self.0[2]),
        )
    }
}

/// Append-only multimap from corner to the vertex-index rings of every
/// profile instance recorded there.
#[derive(Debug, Default)]
pub struct CornerMap {
    map: HashMap<CornerKey, Vec<Vec<u32>>>,
}

impl CornerMap {
    /// Creates an empty corner map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a profile ring at the corner for `position`.
    pub fn record(&mut self, position: DVec3, ring: Vec<u32>) {
        self.map.entry(CornerKey::new(position)).or_default().push(ring);
    }

    /// Number of distinct corners recorded.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no corner has been recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over corners and their recorded rings.
    pub fn iter(&self) -> impl Iterator<Item = (&CornerKey, &Vec<Vec<u32>>)> {
        self.map.iter()
    }
}
