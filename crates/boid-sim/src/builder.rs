//! Fluent builder for constructing a [`Sim`].

use boid_agent::AgentStore;
use boid_core::{FrameClock, Multipliers, SimConfig};
use boid_spatial::{Collider, SpatialError};
use boid_steer::{GlobalSettings, GroupDescriptor, Sphere, SteeringModel};
use tracing::info;

use crate::{GroupAccumulator, GroupPlan, RunControl, Sim, SimError, SimResult, StagingBuffers};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, frame count, fixed delta, …
/// - [`AgentStore`] — from [`boid_agent::AgentStoreBuilder`] or a
///   [`boid_agent::Spawner`]
/// - `M: SteeringModel` — usually [`boid_steer::FlockSteering`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                            |
/// |-------------------|----------------------------------------------------|
/// | `.settings(s)`    | `GlobalSettings::default()`                        |
/// | `.sphere(s)`      | `Sphere::default()` (radius 10)                    |
/// | `.groups(v)`      | One neutral descriptor per populated group          |
/// | `.obstacles(v)`   | None                                               |
/// | `.control(c)`     | `RunControl::RUNNING`                              |
///
/// # Example
///
/// ```rust
/// use boid_agent::{AgentSpec, AgentStoreBuilder};
/// use boid_core::{GroupId, SimConfig, Transform};
/// use boid_sim::{NoopObserver, SimBuilder};
/// use boid_steer::FlockSteering;
///
/// let store = AgentStoreBuilder::new(1)
///     .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
///     .build()
///     .unwrap();
/// let config = SimConfig { total_frames: 3, ..SimConfig::default() };
/// let mut sim = SimBuilder::new(config, store, FlockSteering).build().unwrap();
/// sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(sim.clock.current_frame.0, 3);
/// ```
pub struct SimBuilder<M: SteeringModel> {
    config:    SimConfig,
    agents:    AgentStore,
    model:     M,
    settings:  GlobalSettings,
    sphere:    Sphere,
    groups:    Option<Vec<GroupDescriptor>>,
    obstacles: Vec<Collider>,
    control:   RunControl,
}

impl<M: SteeringModel> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, model: M) -> Self {
        Self {
            config,
            agents,
            model,
            settings:  GlobalSettings::default(),
            sphere:    Sphere::default(),
            groups:    None,
            obstacles: Vec::new(),
            control:   RunControl::default(),
        }
    }

    pub fn settings(mut self, settings: GlobalSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn sphere(mut self, sphere: Sphere) -> Self {
        self.sphere = sphere;
        self
    }

    /// Declare the simulated groups.
    ///
    /// Every populated group in the store must be declared, and the number
    /// of descriptors is the `total` used for sphere placement.
    pub fn groups(mut self, groups: Vec<GroupDescriptor>) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Static colliders seen by the separation query.
    pub fn obstacles(mut self, obstacles: Vec<Collider>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn control(mut self, control: RunControl) -> Self {
        self.control = control;
        self
    }

    /// Validate inputs, resolve group targets, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        self.settings.validate()?;
        self.sphere.validate()?;

        // ── Resolve and validate descriptors ──────────────────────────────
        let mut descriptors = match self.groups {
            Some(g) => g,
            None => self
                .agents
                .groups()
                .populated()
                .map(|id| GroupDescriptor::new(id, Multipliers::ONE))
                .collect(),
        };
        for d in &descriptors {
            d.validate()?;
        }
        descriptors.sort_by_key(|d| d.id);
        if let Some(pair) = descriptors.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(SimError::DuplicateGroup(pair[0].id));
        }

        for group in self.agents.groups().populated() {
            if descriptors.binary_search_by_key(&group, |d| d.id).is_err() {
                return Err(SimError::UndeclaredGroup {
                    group,
                    agents: self.agents.groups().len(group),
                });
            }
        }

        if let Some(bad) = self.obstacles.iter().find(|o| !o.position.is_finite()) {
            let p = bad.position;
            return Err(SpatialError::NonFinitePosition { x: p.x, y: p.y, z: p.z }.into());
        }

        // ── Precompute per-group weights and targets ──────────────────────
        let group_count = descriptors.len();
        let plans = descriptors
            .into_iter()
            .map(|descriptor| -> SimResult<GroupPlan> {
                Ok(GroupPlan {
                    weights: self.settings.multipliers.combine(descriptor.multipliers),
                    target:  self.sphere.group_target(descriptor.id, group_count)?,
                    descriptor,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let staging = StagingBuffers::for_groups(plans.iter().map(GroupPlan::id), &self.agents);

        info!(
            agents = self.agents.count,
            groups = plans.len(),
            obstacles = self.obstacles.len(),
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock:       FrameClock::new(),
            config:      self.config,
            agents:      self.agents,
            settings:    self.settings,
            sphere:      self.sphere,
            plans,
            obstacles:   self.obstacles,
            accumulator: GroupAccumulator::new(),
            staging,
            control:     self.control,
            model:       self.model,
        })
    }
}
