//! A steering model that never moves anything.

use boid_core::Transform;

use crate::{AgentInput, GroupFrame, SteerContext, SteeringModel};

/// A [`SteeringModel`] that returns every transform unchanged.
///
/// Useful in tests that exercise accumulation and commit without motion.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrozenSteering;

impl SteeringModel for FrozenSteering {
    fn steer(&self, agent: &AgentInput, _group: &GroupFrame, _ctx: &SteerContext<'_>) -> Transform {
        agent.transform
    }
}
