//! Read-only frame state passed to every kernel call.

use boid_core::{AgentId, Frame, GroupId, Multipliers, Transform, Vec3};
use boid_spatial::SpatialQuery;

use crate::GlobalSettings;

/// A read-only snapshot of the frame shared by all kernel calls.
///
/// Built once per frame by the simulation and shared immutably across every
/// kernel task.  The spatial query is built from frame-start transforms, so
/// no task can observe another task's output.
pub struct SteerContext<'a> {
    /// Frame being computed.
    pub frame: Frame,

    /// Seconds to integrate this frame.  Zero freezes motion.
    pub delta_time: f32,

    pub settings: &'a GlobalSettings,

    /// Broad phase over all colliders at frame start.
    pub neighbours: &'a dyn SpatialQuery,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(
        frame:      Frame,
        delta_time: f32,
        settings:   &'a GlobalSettings,
        neighbours: &'a dyn SpatialQuery,
    ) -> Self {
        Self { frame, delta_time, settings, neighbours }
    }
}

/// Per-group inputs for one frame: the descriptor's weights, last frame's
/// averages, and the attraction point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroupFrame {
    pub group: GroupId,

    /// `global × group` multipliers, pre-combined once per frame.
    pub weights: Multipliers,

    /// Previous frame's mean heading.  `Vec3::ZERO` until the group has been
    /// averaged once.
    pub avg_heading: Vec3,

    /// Previous frame's mean position.
    pub avg_position: Vec3,

    /// Where the group's coherence force pulls.
    pub target: Vec3,
}

impl GroupFrame {
    /// `true` while the averages are still the zero sentinel.
    #[inline]
    pub fn is_uninitialised(&self) -> bool {
        self.avg_heading == Vec3::ZERO
    }
}

/// One agent's inputs to the kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentInput {
    pub id:          AgentId,
    pub transform:   Transform,
    pub multipliers: Multipliers,
}
