//! Per-group running sums and one-frame-lagged averages.
//!
//! # Frame protocol
//!
//! ```text
//! begin_frame()     zero every group's sums
//! record / absorb   fold member results into the sums
//! finalize_frame()  back[g] = sums[g] / count, or front[g] if count == 0
//!                   swap(front, back)
//! ```
//!
//! Kernels read `front` only, so the averages they see are always the ones
//! finalised at the end of the previous frame.  Concurrent kernel tasks never
//! touch the accumulator: each group's staged results are reduced to a
//! [`GroupSums`] and absorbed afterwards in a fixed order.

use boid_core::{CoreError, GROUP_COUNT, GroupId, Transform, Vec3};
use tracing::trace;

use crate::SimResult;

// ── GroupSums ─────────────────────────────────────────────────────────────────

/// Mergeable partial sums of one group's headings and positions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GroupSums {
    pub count:    u32,
    pub heading:  Vec3,
    pub position: Vec3,
}

impl GroupSums {
    pub const ZERO: GroupSums = GroupSums { count: 0, heading: Vec3::ZERO, position: Vec3::ZERO };

    #[inline]
    pub fn add(&mut self, heading: Vec3, position: Vec3) {
        self.count += 1;
        self.heading += heading;
        self.position += position;
    }

    #[inline]
    pub fn merge(&mut self, other: &GroupSums) {
        self.count += other.count;
        self.heading += other.heading;
        self.position += other.position;
    }

    /// Sums of the forward headings and positions of `transforms`, folded in
    /// slice order.
    pub fn of_transforms(transforms: &[Transform]) -> Self {
        let mut sums = Self::ZERO;
        for t in transforms {
            sums.add(t.forward(), t.position);
        }
        sums
    }

    /// `None` when the group had no members.
    #[inline]
    pub fn average(&self) -> Option<GroupAverage> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f32;
        Some(GroupAverage { heading: self.heading / n, position: self.position / n })
    }
}

// ── GroupAverage ──────────────────────────────────────────────────────────────

/// A group's mean heading and position.  All-zero means "never averaged".
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GroupAverage {
    pub heading:  Vec3,
    pub position: Vec3,
}

impl GroupAverage {
    pub const ZERO: GroupAverage = GroupAverage { heading: Vec3::ZERO, position: Vec3::ZERO };
}

// ── GroupAccumulator ──────────────────────────────────────────────────────────

/// Running sums plus double-buffered averages for every group slot.
#[derive(Clone, Debug)]
pub struct GroupAccumulator {
    sums:  Vec<GroupSums>,
    front: Vec<GroupAverage>,
    back:  Vec<GroupAverage>,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self {
            sums:  vec![GroupSums::ZERO; GROUP_COUNT],
            front: vec![GroupAverage::ZERO; GROUP_COUNT],
            back:  vec![GroupAverage::ZERO; GROUP_COUNT],
        }
    }

    /// Zero every group's running sums.  Published averages are untouched.
    pub fn begin_frame(&mut self) {
        self.sums.fill(GroupSums::ZERO);
    }

    /// Add one member's resulting heading and position.
    pub fn record(&mut self, group: GroupId, heading: Vec3, position: Vec3) -> SimResult<()> {
        self.slot(group)?.add(heading, position);
        Ok(())
    }

    /// Merge a pre-reduced partial sum into `group`.
    pub fn absorb(&mut self, group: GroupId, sums: &GroupSums) -> SimResult<()> {
        self.slot(group)?.merge(sums);
        Ok(())
    }

    /// Publish this frame's averages.  Groups without members keep their
    /// previous averages bit for bit.  Returns how many groups were updated.
    pub fn finalize_frame(&mut self) -> usize {
        let mut updated = 0;
        for (i, sums) in self.sums.iter().enumerate() {
            self.back[i] = match sums.average() {
                Some(avg) => {
                    updated += 1;
                    trace!(group = i, count = sums.count, heading = ?avg.heading, "group averaged");
                    avg
                }
                None => self.front[i],
            };
        }
        std::mem::swap(&mut self.front, &mut self.back);
        updated
    }

    /// The averages kernels read this frame.  Zero for unknown groups.
    #[inline]
    pub fn average(&self, group: GroupId) -> GroupAverage {
        self.front.get(group.index()).copied().unwrap_or(GroupAverage::ZERO)
    }

    /// Sums accumulated so far this frame.
    #[inline]
    pub fn sums(&self, group: GroupId) -> GroupSums {
        self.sums.get(group.index()).copied().unwrap_or(GroupSums::ZERO)
    }

    fn slot(&mut self, group: GroupId) -> SimResult<&mut GroupSums> {
        self.sums
            .get_mut(group.index())
            .ok_or_else(|| CoreError::GroupOutOfRange(group).into())
    }
}

impl Default for GroupAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
