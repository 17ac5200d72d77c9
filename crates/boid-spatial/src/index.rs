//! R-tree broad-phase over point colliders.
//!
//! # Data layout
//!
//! Every collider (agent or static obstacle) is a 3-D point entry in an
//! `rstar` R-tree.  The tree is bulk-loaded once per frame from the
//! authoritative transforms, then shared read-only by every kernel task.
//! Trigger colliders are kept out of the tree entirely, so queries never
//! have to filter them.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use boid_core::{AgentId, Vec3};

use crate::{CollisionFilter, DistanceHit, SpatialError, SpatialQuery, SpatialResult};

// ── Collider ──────────────────────────────────────────────────────────────────

/// A point collider to be indexed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collider {
    pub position: Vec3,
    pub layers:   u32,
    /// Trigger colliders are never returned by queries.
    pub trigger:  bool,
    /// Owning agent; `None` for static obstacles.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub agent:    Option<AgentId>,
}

impl Collider {
    /// A solid static obstacle.
    pub fn obstacle(position: Vec3, layers: u32) -> Self {
        Self { position, layers, trigger: false, agent: None }
    }

    /// An agent's own collider.
    pub fn agent(agent: AgentId, position: Vec3, layers: u32, trigger: bool) -> Self {
        Self { position, layers, trigger, agent: Some(agent) }
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ColliderEntry {
    point:  [f32; 3],
    layers: u32,
    agent:  Option<AgentId>,
}

impl RTreeObject for ColliderEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ColliderEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Point-collider R-tree implementing [`SpatialQuery`].
///
/// Do not construct directly; use [`SpatialIndexBuilder`].
pub struct SpatialIndex {
    tree: RTree<ColliderEntry>,
}

impl SpatialIndex {
    /// An index with no colliders.  Every query returns nothing.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Number of indexed (non-trigger) colliders.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialQuery for SpatialIndex {
    fn overlap_sphere_into(
        &self,
        center: Vec3,
        radius: f32,
        filter: CollisionFilter,
        hits:   &mut Vec<DistanceHit>,
    ) {
        if radius.is_nan() || radius < 0.0 || filter.collides_with == 0 {
            return;
        }
        let query = center.to_array();
        for entry in self.tree.locate_within_distance(query, radius * radius) {
            if !filter.accepts(entry.layers) {
                continue;
            }
            let position = Vec3::from_array(entry.point);
            hits.push(DistanceHit {
                position,
                distance: position.distance(center),
                agent:    entry.agent,
            });
        }
    }
}

// ── SpatialIndexBuilder ───────────────────────────────────────────────────────

/// Collect colliders, then bulk-load them with [`build`](Self::build).
///
/// # Example
///
/// ```
/// use boid_core::Vec3;
/// use boid_spatial::{Collider, CollisionFilter, SpatialIndexBuilder, SpatialQuery};
///
/// let mut b = SpatialIndexBuilder::with_capacity(2);
/// b.add(Collider::obstacle(Vec3::ZERO, 1)).unwrap();
/// b.add(Collider::obstacle(Vec3::new(5.0, 0.0, 0.0), 1)).unwrap();
/// let index = b.build();
/// let hits = index.overlap_sphere(Vec3::ZERO, 1.0, CollisionFilter::ALL);
/// assert_eq!(hits.len(), 1);
/// ```
pub struct SpatialIndexBuilder {
    entries: Vec<ColliderEntry>,
}

impl SpatialIndexBuilder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Pre-allocate for the expected number of colliders.
    pub fn with_capacity(colliders: usize) -> Self {
        Self { entries: Vec::with_capacity(colliders) }
    }

    /// Add one collider.  Triggers are accepted and dropped.
    pub fn add(&mut self, collider: Collider) -> SpatialResult<()> {
        let p = collider.position;
        if !p.is_finite() {
            return Err(SpatialError::NonFinitePosition { x: p.x, y: p.y, z: p.z });
        }
        if !collider.trigger {
            self.entries.push(ColliderEntry {
                point:  p.to_array(),
                layers: collider.layers,
                agent:  collider.agent,
            });
        }
        Ok(())
    }

    /// Add many colliders, stopping at the first invalid one.
    pub fn extend(&mut self, colliders: impl IntoIterator<Item = Collider>) -> SpatialResult<()> {
        for c in colliders {
            self.add(c)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the builder and produce a [`SpatialIndex`].
    ///
    /// Time complexity: O(N log N) bulk load.
    pub fn build(self) -> SpatialIndex {
        SpatialIndex { tree: RTree::bulk_load(self.entries) }
    }
}

impl Default for SpatialIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
