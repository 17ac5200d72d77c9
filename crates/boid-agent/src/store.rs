//! Core agent storage: `AgentStore` (SoA data).
//!
//! Every per-agent `Vec` has exactly `count` elements and the `AgentId` value
//! is the index into all of them:
//!
//! ```ignore
//! let pos = store.transforms[agent.index()].position;  // O(1), cache-friendly
//! ```
//!
//! `transforms` is the authoritative transform store.  During a frame the
//! simulation only reads it; new transforms are written back in one batch per
//! group by the transform commit at the end of the frame.

use boid_core::{AgentId, CoreError, CoreResult, GROUP_COUNT, GroupId, Multipliers, Transform, Vec3};

use crate::builder::AgentSpec;
use crate::groups::GroupIndex;

/// Structure-of-Arrays storage for all agent state.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position + orientation.  Mutated only by the transform commit.
    pub transforms: Vec<Transform>,

    /// Per-agent weights, fixed at spawn.
    pub multipliers: Vec<Multipliers>,

    /// Owning group, fixed at spawn.  `GroupId::NONE` means "not simulated".
    pub group: Vec<GroupId>,

    /// Collision layer bits.  A neighbour query sees the agent only if its
    /// filter mask shares a bit with this value.
    pub layers: Vec<u32>,

    /// Trigger-only colliders are invisible to neighbour queries.
    pub trigger: Vec<bool>,

    groups: GroupIndex,
}

impl AgentStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            count:       0,
            transforms:  Vec::with_capacity(capacity),
            multipliers: Vec::with_capacity(capacity),
            group:       Vec::with_capacity(capacity),
            layers:      Vec::with_capacity(capacity),
            trigger:     Vec::with_capacity(capacity),
            groups:      GroupIndex::new(),
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// The group membership index.
    #[inline]
    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    // ── Spawn ─────────────────────────────────────────────────────────────

    /// Append one agent and register it with its group.
    ///
    /// # Errors
    ///
    /// Rejects a group id outside `0..GROUP_COUNT`, non-finite multipliers,
    /// and transforms that are non-finite or carry a zero quaternion.  These are setup-time contract violations; nothing is
    /// stored when an error is returned.
    pub fn push(&mut self, spec: AgentSpec) -> CoreResult<AgentId> {
        if spec.group.index() >= GROUP_COUNT {
            return Err(CoreError::GroupOutOfRange(spec.group));
        }
        if !spec.multipliers.is_finite() {
            return Err(CoreError::Config(format!(
                "agent multipliers must be finite, got {:?}",
                spec.multipliers
            )));
        }
        if !spec.transform.position.is_finite()
            || !spec.transform.rotation.is_finite()
            || spec.transform.rotation.length_squared() == 0.0
        {
            return Err(CoreError::Config(format!(
                "agent transform must be finite, got {}",
                spec.transform
            )));
        }

        let id = AgentId::try_from(self.count)
            .map_err(|_| CoreError::Config("agent count exceeds u32 range".into()))?;

        self.transforms.push(Transform {
            position: spec.transform.position,
            rotation: spec.transform.rotation.normalize(),
        });
        self.multipliers.push(spec.multipliers);
        self.group.push(spec.group);
        self.layers.push(spec.layers);
        self.trigger.push(spec.trigger);
        self.groups.insert(spec.group, id);
        self.count += 1;

        Ok(id)
    }

    // ── Transform access ──────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self, agent: AgentId) -> Transform {
        self.transforms[agent.index()]
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.transforms[agent.index()].position
    }

    #[inline]
    pub fn forward(&self, agent: AgentId) -> Vec3 {
        self.transforms[agent.index()].forward()
    }

    /// Bulk read of the transforms of `agents`, in the given order.
    pub fn transforms_of(&self, agents: &[AgentId]) -> Vec<Transform> {
        agents.iter().map(|a| self.transforms[a.index()]).collect()
    }

    /// Bulk write: `agents[i]` receives `transforms[i]`.
    ///
    /// # Panics
    /// Panics if the slices differ in length.
    pub fn set_transforms(&mut self, agents: &[AgentId], transforms: &[Transform]) {
        assert_eq!(
            agents.len(),
            transforms.len(),
            "set_transforms: {} agents but {} transforms",
            agents.len(),
            transforms.len(),
        );
        for (agent, &t) in agents.iter().zip(transforms) {
            self.transforms[agent.index()] = t;
        }
    }

    /// Bulk write of a whole group: member `i` (in spawn order) receives
    /// `transforms[i]`.
    ///
    /// # Errors
    /// Returns the member count if it differs from `transforms.len()`;
    /// nothing is written in that case.
    pub fn set_group_transforms(
        &mut self,
        group:      GroupId,
        transforms: &[Transform],
    ) -> Result<(), usize> {
        let members = self.groups.members(group);
        if members.len() != transforms.len() {
            return Err(members.len());
        }
        for (agent, &t) in members.iter().zip(transforms) {
            self.transforms[agent.index()] = t;
        }
        Ok(())
    }
}
