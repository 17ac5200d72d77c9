//! Group membership index.
//!
//! Agents live in one flat SoA store; the kernel, however, runs group by
//! group.  `GroupIndex` keeps, for every group slot, the list of member
//! `AgentId`s in ascending spawn order.  Membership only changes at spawn, so
//! the index is appended to by [`AgentStore::push`][crate::AgentStore::push]
//! and otherwise read-only.

use boid_core::{AgentId, GROUP_COUNT, GroupId};

/// `GroupId → [AgentId]`, one contiguous list per group slot.
///
/// Always has `GROUP_COUNT` slots.  Slot 0 collects agents spawned without a
/// group; they are stored but never simulated.
#[derive(Clone, Debug)]
pub struct GroupIndex {
    members: Vec<Vec<AgentId>>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self { members: vec![Vec::new(); GROUP_COUNT] }
    }

    /// Append `agent` to `group`'s member list.
    ///
    /// # Panics
    /// Panics if `group.index() >= GROUP_COUNT`.  The store validates ids
    /// before calling this.
    pub(crate) fn insert(&mut self, group: GroupId, agent: AgentId) {
        self.members[group.index()].push(agent);
    }

    /// Members of `group`, in spawn order.  Empty for unknown groups.
    #[inline]
    pub fn members(&self, group: GroupId) -> &[AgentId] {
        self.members
            .get(group.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of agents in `group`.
    #[inline]
    pub fn len(&self, group: GroupId) -> usize {
        self.members(group).len()
    }

    /// Simulated groups with at least one member, ascending.
    pub fn populated(&self) -> impl Iterator<Item = GroupId> + '_ {
        GroupId::simulated().filter(|&g| !self.members(g).is_empty())
    }

    /// Total agents across simulated groups (excludes slot 0).
    pub fn simulated_count(&self) -> usize {
        GroupId::simulated().map(|g| self.len(g)).sum()
    }
}

impl Default for GroupIndex {
    fn default() -> Self {
        Self::new()
    }
}
