//! Per-group staging buffers and the end-of-frame transform commit.
//!
//! Kernel tasks write only into their group's buffer, at the agent's
//! position within the group.  [`StagingBuffers::commit`] is the one place
//! the authoritative transforms change.

use boid_agent::AgentStore;
use boid_core::{GroupId, Transform};

use crate::{SimError, SimResult};

/// New transforms for one group, in member order.
#[derive(Clone, Debug)]
pub struct GroupStaging {
    pub group:      GroupId,
    pub transforms: Vec<Transform>,
}

/// One buffer per simulated group.
#[derive(Clone, Debug, Default)]
pub struct StagingBuffers {
    buffers: Vec<GroupStaging>,
}

impl StagingBuffers {
    /// Buffers for `groups`, each pre-sized to its member count in `store`.
    pub fn for_groups(groups: impl IntoIterator<Item = GroupId>, store: &AgentStore) -> Self {
        let buffers = groups
            .into_iter()
            .map(|group| GroupStaging {
                group,
                transforms: Vec::with_capacity(store.groups().len(group)),
            })
            .collect();
        Self { buffers }
    }

    #[inline]
    pub fn buffers(&self) -> &[GroupStaging] {
        &self.buffers
    }

    #[inline]
    pub fn buffers_mut(&mut self) -> &mut [GroupStaging] {
        &mut self.buffers
    }

    /// Copy every buffer into `store` in one batch per group, then clear the
    /// buffers.  Capacity is kept for the next frame.
    ///
    /// A buffer whose length differs from its group's member count is an
    /// error and leaves that group (and every later one) untouched.
    pub fn commit(&mut self, store: &mut AgentStore) -> SimResult<()> {
        for buf in &mut self.buffers {
            store
                .set_group_transforms(buf.group, &buf.transforms)
                .map_err(|members| SimError::LengthMismatch {
                    expected: members,
                    got:      buf.transforms.len(),
                    what:     "staged transforms",
                })?;
            buf.transforms.clear();
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        for buf in &mut self.buffers {
            buf.transforms.clear();
        }
    }
}
