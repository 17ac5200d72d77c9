//! `FlockConfig` — everything needed to spawn and run a flocking world.
//!
//! With the `serde` feature the whole bundle (and every nested type) can be
//! loaded from JSON or TOML.  Every field has a default, so a config file
//! only needs to name what it changes.

use boid_agent::{AgentSpec, AgentStore, AgentStoreBuilder, DEFAULT_LAYERS, SpawnConfig, Spawner};
use boid_core::{GroupId, Multipliers, SimConfig, Transform};
use boid_spatial::Collider;
use boid_steer::{GlobalSettings, GroupDescriptor, Sphere, SteeringModel};

use crate::{Sim, SimBuilder, SimError, SimResult};

/// Settings shared by every spawned agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentTemplate {
    pub multipliers: Multipliers,
    pub layers:      u32,
    pub trigger:     bool,
}

impl AgentTemplate {
    fn spec(&self) -> AgentSpec {
        let spec = AgentSpec::new(GroupId::NONE, Transform::IDENTITY)
            .with_multipliers(self.multipliers)
            .with_layers(self.layers);
        if self.trigger { spec.as_trigger() } else { spec }
    }
}

impl Default for AgentTemplate {
    fn default() -> Self {
        Self {
            multipliers: Multipliers::ONE,
            layers:      DEFAULT_LAYERS,
            trigger:     false,
        }
    }
}

/// Run configuration, steering settings, groups, population and obstacles.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    pub sim:       SimConfig,
    pub settings:  GlobalSettings,
    pub sphere:    Sphere,
    /// One descriptor per flock.  Ids must be `1..=groups.len()` so every
    /// group gets a placement slot.
    pub groups:    Vec<GroupDescriptor>,
    pub spawn:     SpawnConfig,
    pub agent:     AgentTemplate,
    pub obstacles: Vec<Collider>,
}

impl FlockConfig {
    /// `group_count` neutral groups sharing `total_agents` agents.
    pub fn uniform(group_count: u16, total_agents: usize) -> Self {
        let groups = (1..=group_count)
            .map(|i| GroupDescriptor::new(GroupId(i), Multipliers::ONE))
            .collect();
        Self {
            groups,
            spawn: SpawnConfig {
                target_total_count: total_agents,
                group_count:        group_count as usize,
                ..SpawnConfig::default()
            },
            ..Self::default()
        }
    }

    /// Cross-field checks; each part validates itself as well.
    pub fn validate(&self) -> SimResult<()> {
        self.sim.validate()?;
        self.settings.validate()?;
        self.sphere.validate()?;
        self.spawn.validate()?;
        for group in &self.groups {
            group.validate()?;
        }
        if self.spawn.group_count != self.groups.len() {
            return Err(SimError::LengthMismatch {
                expected: self.groups.len(),
                got:      self.spawn.group_count,
                what:     "spawn.group_count",
            });
        }
        Ok(())
    }

    /// Spawn `spawn.agents_per_group()` agents around each group's target,
    /// groups in declaration order, seeded from `sim.seed`.
    pub fn spawn_agents(&self) -> SimResult<AgentStore> {
        self.validate()?;
        let mut spawner = Spawner::new(self.spawn.clone(), self.sim.seed)?;
        let mut store = AgentStoreBuilder::empty(self.spawn.total_count());
        let prefab = self.agent.spec();
        for group in &self.groups {
            let target = self.sphere.group_target(group.id, self.groups.len())?;
            spawner.spawn_group(&mut store, group.id, target, prefab)?;
        }
        Ok(store)
    }

    /// Spawn the agents and build a ready-to-run [`Sim`].
    pub fn build_sim<M: SteeringModel>(&self, model: M) -> SimResult<Sim<M>> {
        let agents = self.spawn_agents()?;
        SimBuilder::new(self.sim.clone(), agents, model)
            .settings(self.settings.clone())
            .sphere(self.sphere)
            .groups(self.groups.clone())
            .obstacles(self.obstacles.clone())
            .build()
    }
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            sim:       SimConfig::default(),
            settings:  GlobalSettings::default(),
            sphere:    Sphere::default(),
            groups:    Vec::new(),
            spawn:     SpawnConfig::default(),
            agent:     AgentTemplate::default(),
            obstacles: Vec::new(),
        }
    }
}
