//! The `Sim` struct and its frame loop.

use boid_agent::AgentStore;
use boid_core::{AgentId, Frame, FrameClock, GroupId, Multipliers, SimConfig, Transform, Vec3};
use boid_spatial::{Collider, SpatialIndex, SpatialIndexBuilder};
use boid_steer::{
    AgentInput, GlobalSettings, GroupDescriptor, GroupFrame, Sphere, SteerContext, SteeringModel,
};
use tracing::debug;

use crate::{
    FrameStats, GroupAccumulator, GroupAverage, GroupSums, NoopObserver, RunControl, SimError,
    SimObserver, SimResult, StagingBuffers,
};

// ── GroupPlan ─────────────────────────────────────────────────────────────────

/// A declared group with everything the kernel needs that never changes:
/// the descriptor, `global × group` weights and the sphere target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroupPlan {
    pub descriptor: GroupDescriptor,
    pub weights:    Multipliers,
    pub target:     Vec3,
}

impl GroupPlan {
    #[inline]
    pub fn id(&self) -> GroupId {
        self.descriptor.id
    }

    /// The kernel's view of this group given last frame's averages.
    #[inline]
    pub fn frame(&self, avg: GroupAverage) -> GroupFrame {
        GroupFrame {
            group:        self.descriptor.id,
            weights:      self.weights,
            avg_heading:  avg.heading,
            avg_position: avg.position,
            target:       self.target,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M>` holds all simulation state and drives the frame loop:
///
/// 1. **Spatial rebuild**: bulk-load an R-tree from the frame-start
///    transforms plus the static obstacles.
/// 2. **Begin**: zero every group's running sums.
/// 3. **Kernel phase** (optionally parallel with the `parallel` feature):
///    call [`SteeringModel::steer`] for every member of every declared group,
///    writing into that group's staging buffer.
/// 4. **Reduce**: fold each group's staged transforms into a [`GroupSums`]
///    in member order and absorb them in ascending group order.
/// 5. **Commit**: copy staging buffers into the agent store.
/// 6. **Finalise**: publish next frame's averages.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: SteeringModel> {
    pub config: SimConfig,

    /// Current frame and accumulated simulated seconds.
    pub clock: FrameClock,

    /// Authoritative agent state.  Only the commit step writes transforms.
    pub agents: AgentStore,

    pub settings: GlobalSettings,

    pub sphere: Sphere,

    /// Declared groups, ascending by id.
    pub plans: Vec<GroupPlan>,

    /// Static colliders, indexed alongside the agents every frame.
    pub obstacles: Vec<Collider>,

    pub accumulator: GroupAccumulator,

    pub staging: StagingBuffers,

    /// Run/pause state consulted once per frame.
    pub control: RunControl,

    pub model: M,
}

impl<M: SteeringModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`, feeding
    /// `config.fixed_delta_secs` to every frame.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let delta = self.config.fixed_delta_secs;
        while self.clock.current_frame < self.config.end_frame() {
            self.step_observed(delta, observer)?;
        }
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run one frame per entry of `deltas` (ignores `end_frame`).
    ///
    /// Useful for tests and for hosts that measure their own frame time.
    pub fn run_frames<O: SimObserver>(&mut self, deltas: &[f32], observer: &mut O) -> SimResult<()> {
        for &delta in deltas {
            self.step_observed(delta, observer)?;
        }
        Ok(())
    }

    /// Run a single frame with `delta_secs` and no observer.
    pub fn step(&mut self, delta_secs: f32) -> SimResult<FrameStats> {
        self.step_observed(delta_secs, &mut NoopObserver)
    }

    /// The sphere target of `group`, if it is declared.
    pub fn target(&self, group: GroupId) -> Option<Vec3> {
        self.plan(group).map(|p| p.target)
    }

    pub fn plan(&self, group: GroupId) -> Option<&GroupPlan> {
        self.plans
            .binary_search_by_key(&group, GroupPlan::id)
            .ok()
            .map(|i| &self.plans[i])
    }

    // ── Frame processing ──────────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, delta_secs: f32, observer: &mut O) -> SimResult<FrameStats> {
        let now = self.clock.current_frame;
        observer.on_frame_start(now);

        let stats = self.process_frame(now, delta_secs)?;
        observer.on_frame_end(&stats);

        let interval = self.config.output_interval_frames;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance(stats.delta_secs);
        Ok(stats)
    }

    fn process_frame(&mut self, now: Frame, requested: f32) -> SimResult<FrameStats> {
        if !requested.is_finite() || requested < 0.0 {
            return Err(SimError::InvalidDelta(requested));
        }
        let delta = self.control.effective_delta(requested);

        // ── Phase 1: spatial index over frame-start transforms ────────────
        let index = build_spatial_index(&self.agents, &self.obstacles)?;

        // ── Phase 2: reset running sums ───────────────────────────────────
        self.accumulator.begin_frame();

        let groups = self.agents.groups();
        let mut stats = FrameStats {
            frame:            now,
            delta_secs:       delta,
            agents:           0,
            groups_simulated: 0,
            pass_through:     0,
        };
        for plan in &self.plans {
            let members = groups.len(plan.id());
            if members == 0 {
                continue;
            }
            stats.agents += members;
            stats.groups_simulated += 1;
            if self.accumulator.average(plan.id()).heading == Vec3::ZERO {
                stats.pass_through += members;
            }
        }

        // ── Phase 3: kernel phase (produce) ───────────────────────────────
        let sums = self.compute_transforms(now, delta, &index);

        // ── Phase 4: reduce in ascending group order ──────────────────────
        for (plan, partial) in self.plans.iter().zip(&sums) {
            self.accumulator.absorb(plan.id(), partial)?;
        }

        // ── Phase 5: commit (consume) ─────────────────────────────────────
        self.staging.commit(&mut self.agents)?;

        // ── Phase 6: publish next frame's averages ────────────────────────
        self.accumulator.finalize_frame();

        debug!(
            frame = %now,
            dt = delta,
            agents = stats.agents,
            groups = stats.groups_simulated,
            pass_through = stats.pass_through,
            "frame complete"
        );
        Ok(stats)
    }

    /// Run the model over every declared group, filling the staging
    /// buffers.  Returns each group's partial sums in plan order.
    ///
    /// With the `parallel` Cargo feature, groups and the members within a
    /// group are both spread over Rayon's thread pool.
    fn compute_transforms(&mut self, now: Frame, delta: f32, index: &SpatialIndex) -> Vec<GroupSums> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents      = &self.agents;
        let plans       = self.plans.as_slice();
        let accumulator = &self.accumulator;
        let model       = &self.model;
        let buffers     = self.staging.buffers_mut();

        let ctx = SteerContext::new(now, delta, &self.settings, index);

        #[cfg(not(feature = "parallel"))]
        {
            plans
                .iter()
                .zip(buffers.iter_mut())
                .map(|(plan, buf)| {
                    let frame = plan.frame(accumulator.average(plan.id()));
                    steer_group(model, agents, &frame, &ctx, &mut buf.transforms)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            plans
                .par_iter()
                .zip(buffers.par_iter_mut())
                .map(|(plan, buf)| {
                    let frame = plan.frame(accumulator.average(plan.id()));
                    steer_group(model, agents, &frame, &ctx, &mut buf.transforms)
                })
                .collect()
        }
    }
}

/// Steer every member of `frame.group` into `out` (member order) and return
/// the group's sums over the results.
fn steer_group<M: SteeringModel>(
    model:  &M,
    agents: &AgentStore,
    frame:  &GroupFrame,
    ctx:    &SteerContext<'_>,
    out:    &mut Vec<Transform>,
) -> GroupSums {
    let members = agents.groups().members(frame.group);
    let steer = |&agent: &AgentId| {
        let input = AgentInput {
            id:          agent,
            transform:   agents.transform(agent),
            multipliers: agents.multipliers[agent.index()],
        };
        model.steer(&input, frame, ctx)
    };

    #[cfg(not(feature = "parallel"))]
    {
        out.clear();
        out.extend(members.iter().map(steer));
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        members.par_iter().map(steer).collect_into_vec(out);
    }

    GroupSums::of_transforms(out)
}

/// Bulk-load an index of every agent collider plus `obstacles`.
///
/// Trigger colliders are dropped by the index builder.
pub fn build_spatial_index(agents: &AgentStore, obstacles: &[Collider]) -> SimResult<SpatialIndex> {
    let mut builder = SpatialIndexBuilder::with_capacity(agents.count + obstacles.len());
    builder.extend(obstacles.iter().copied())?;
    for agent in agents.agent_ids() {
        let i = agent.index();
        builder.add(Collider::agent(
            agent,
            agents.transforms[i].position,
            agents.layers[i],
            agents.trigger[i],
        ))?;
    }
    Ok(builder.build())
}
