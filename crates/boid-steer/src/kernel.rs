//! The per-agent flocking kernel.
//!
//! ```text
//! separation = s · cross(fwd, Σ normalize(n − p) · (radius − |n − p|))
//! alignment  = a · cross(fwd, group_avg_heading)
//! coherence  = c · cross(fwd, normalize(target − p))
//! torque     = alignment + coherence − separation
//! rotation'  = axis_angle(normalize(torque), |torque| · dt) · rotation
//! position'  = position + forward' · speed · dt
//! ```
//!
//! `s`, `a`, `c` and `speed` are the products global × group × agent × debug.
//! Every normalisation is guarded: a degenerate vector contributes nothing
//! instead of producing NaN.

use boid_core::{Multipliers, Quat, Transform, Vec3, try_normalize};

use crate::{AgentInput, GroupFrame, SteerContext};

/// The three weighted torque terms of one agent, before combination.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Torques {
    pub separation: Vec3,
    pub alignment:  Vec3,
    pub coherence:  Vec3,
}

impl Torques {
    /// `alignment + coherence − separation`.
    #[inline]
    pub fn combined(&self) -> Vec3 {
        self.alignment + self.coherence - self.separation
    }
}

/// Effective weights for one agent.
#[inline]
fn effective_weights(agent: &AgentInput, group: &GroupFrame, ctx: &SteerContext<'_>) -> Multipliers {
    group.weights.combine(agent.multipliers).combine(ctx.settings.debug)
}

/// Weighted torque terms for `agent`.  Does not check the pass-through
/// sentinel; see [`steer_agent`].
pub fn torques(agent: &AgentInput, group: &GroupFrame, ctx: &SteerContext<'_>) -> Torques {
    let weights  = effective_weights(agent, group, ctx);
    let position = agent.transform.position;
    let forward  = agent.transform.forward();
    let radius   = ctx.settings.separation_radius;

    // ── Separation ────────────────────────────────────────────────────────
    let hits = ctx
        .neighbours
        .overlap_sphere(position, radius, ctx.settings.separation_filter);

    let mut repulsion = Vec3::ZERO;
    let mut contributors = 0usize;
    for hit in &hits {
        if hit.agent == Some(agent.id) {
            continue;
        }
        let offset = hit.position - position;
        let Some(dir) = try_normalize(offset) else {
            continue;
        };
        repulsion += dir * (radius - offset.length());
        contributors += 1;
    }
    let separation = if contributors == 0 {
        Vec3::ZERO
    } else {
        forward.cross(repulsion) * weights.separation
    };

    // ── Alignment ─────────────────────────────────────────────────────────
    let alignment = forward.cross(group.avg_heading) * weights.alignment;

    // ── Coherence ─────────────────────────────────────────────────────────
    let coherence = try_normalize(group.target - position)
        .map(|to_target| forward.cross(to_target) * weights.coherence)
        .unwrap_or(Vec3::ZERO);

    Torques { separation, alignment, coherence }
}

/// Compute `agent`'s transform for the end of this frame.
///
/// Agents of a group whose average heading is still the zero sentinel pass
/// through unchanged.
pub fn steer_agent(agent: &AgentInput, group: &GroupFrame, ctx: &SteerContext<'_>) -> Transform {
    if group.is_uninitialised() {
        return agent.transform;
    }

    let torque = torques(agent, group, ctx).combined();
    let angle  = torque.length() * ctx.delta_time;

    let mut next = agent.transform;
    if angle != 0.0 && angle.is_finite() {
        if let Some(axis) = try_normalize(torque) {
            next.rotation = (Quat::from_axis_angle(axis, angle) * next.rotation).normalize();
        }
    }

    let speed = effective_weights(agent, group, ctx).speed;
    let step  = speed * ctx.delta_time;
    if step != 0.0 {
        next.position += next.forward() * step;
    }
    next
}
