//! The spatial query interface consumed by the kernel.
//!
//! # Pluggability
//!
//! The kernel only sees [`SpatialQuery`], so applications can back it with a
//! physics engine's broad phase, a uniform grid, or the bundled R-tree
//! ([`SpatialIndex`][crate::SpatialIndex]) without touching the simulation.

use boid_core::{AgentId, Vec3};

/// Layer mask applied to a neighbour query.
///
/// A collider is visible to the query when `collides_with & collider.layers`
/// is non-zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionFilter {
    pub collides_with: u32,
}

impl CollisionFilter {
    /// Sees every layer.
    pub const ALL: CollisionFilter = CollisionFilter { collides_with: u32::MAX };

    /// Sees nothing.
    pub const NONE: CollisionFilter = CollisionFilter { collides_with: 0 };

    #[inline]
    pub fn new(collides_with: u32) -> Self {
        Self { collides_with }
    }

    #[inline]
    pub fn accepts(self, layers: u32) -> bool {
        self.collides_with & layers != 0
    }
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self::ALL
    }
}

/// One collider found by a query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceHit {
    pub position: Vec3,
    /// Euclidean distance from the query centre.
    pub distance: f32,
    /// The agent owning the collider, or `None` for static obstacles.
    pub agent: Option<AgentId>,
}

/// Broad-phase neighbour query.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the kernel calls them from many
/// Rayon workers at once, and they are read-only for the whole frame.
pub trait SpatialQuery: Send + Sync {
    /// Append every non-trigger collider within `radius` of `center` whose
    /// layers pass `filter` to `hits`.
    ///
    /// The order of the appended hits must be a deterministic function of the
    /// query and the indexed data.
    fn overlap_sphere_into(
        &self,
        center: Vec3,
        radius: f32,
        filter: CollisionFilter,
        hits:   &mut Vec<DistanceHit>,
    );

    /// Allocating convenience wrapper around
    /// [`overlap_sphere_into`][Self::overlap_sphere_into].
    fn overlap_sphere(&self, center: Vec3, radius: f32, filter: CollisionFilter) -> Vec<DistanceHit> {
        let mut hits = Vec::new();
        self.overlap_sphere_into(center, radius, filter, &mut hits);
        hits
    }
}
