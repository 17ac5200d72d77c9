//! The `SteeringModel` trait — the extension point for agent motion.

use boid_core::Transform;

use crate::{AgentInput, GroupFrame, SteerContext, steer_agent};

/// Pluggable per-agent motion.
///
/// Given one agent's frame-start inputs, its group's lagged state, and the
/// shared frame context, return the transform the agent should have at the
/// end of the frame.
///
/// # Thread safety
///
/// The simulation may call `steer` for many agents in parallel, so
/// implementations must be `Send + Sync`.  State that varies per agent lives
/// in the agent store and reaches the model through [`AgentInput`], never in
/// the model itself.
///
/// # Example
///
/// ```rust
/// use boid_core::Transform;
/// use boid_steer::{AgentInput, GroupFrame, SteerContext, SteeringModel};
///
/// /// Drifts every agent forward at its speed, ignoring its neighbours.
/// struct Drift;
///
/// impl SteeringModel for Drift {
///     fn steer(&self, agent: &AgentInput, group: &GroupFrame, ctx: &SteerContext<'_>) -> Transform {
///         let speed = group.weights.speed * agent.multipliers.speed;
///         agent.transform.translated(agent.transform.forward() * speed * ctx.delta_time)
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(
        &self,
        agent: &AgentInput,
        group: &GroupFrame,
        ctx:   &SteerContext<'_>,
    ) -> Transform;
}

/// Separation, alignment and coherence steering.  See [`crate::kernel`].
#[derive(Copy, Clone, Debug, Default)]
pub struct FlockSteering;

impl SteeringModel for FlockSteering {
    #[inline]
    fn steer(&self, agent: &AgentInput, group: &GroupFrame, ctx: &SteerContext<'_>) -> Transform {
        steer_agent(agent, group, ctx)
    }
}
