//! Seeded spawner: creates a group's agents scattered around its target.
//!
//! Each agent gets a uniformly random orientation and a position
//! `target + direction * distance`, with `direction` uniform on the unit
//! sphere and `distance` uniform in `[0, group_radius)`.  All draws come from
//! one [`SpawnRng`] stream, so the same seed and the same spawn order give the
//! same initial transforms.

use boid_core::{AgentId, CoreError, CoreResult, GroupId, SpawnRng, Transform, Vec3};
use tracing::debug;

use crate::{AgentSpec, AgentStore};

/// Population size and scatter radius.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnConfig {
    /// Desired total population; rounded down to a multiple of `group_count`.
    pub target_total_count: usize,
    /// Number of flocks.
    pub group_count: usize,
    /// Agents are placed within this distance of their group's target.
    pub group_radius: f32,
}

impl SpawnConfig {
    /// Agents spawned into each group (integer division).
    #[inline]
    pub fn agents_per_group(&self) -> usize {
        if self.group_count == 0 { 0 } else { self.target_total_count / self.group_count }
    }

    /// Agents actually spawned across all groups.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.agents_per_group() * self.group_count
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.group_radius.is_finite() || self.group_radius < 0.0 {
            return Err(CoreError::Config(format!(
                "group_radius must be finite and >= 0, got {}",
                self.group_radius
            )));
        }
        Ok(())
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            target_total_count: 0,
            group_count:        0,
            group_radius:       1.0,
        }
    }
}

/// Places agents around group targets using a seeded stream.
pub struct Spawner {
    config: SpawnConfig,
    rng:    SpawnRng,
}

impl Spawner {
    pub fn new(config: SpawnConfig, seed: u64) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config, rng: SpawnRng::new(seed) })
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Spawn `config.agents_per_group()` agents of `group` around `target`.
    ///
    /// `prefab` supplies the per-agent multipliers, layers and trigger flag;
    /// its group and transform are replaced.  Returns the new ids in order.
    pub fn spawn_group(
        &mut self,
        store:  &mut AgentStore,
        group:  GroupId,
        target: Vec3,
        prefab: AgentSpec,
    ) -> CoreResult<Vec<AgentId>> {
        let n = self.config.agents_per_group();
        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            let rotation  = self.rng.rotation();
            let direction = self.rng.direction();
            let distance  = self.rng.distance(self.config.group_radius);

            let spec = AgentSpec {
                group,
                transform: Transform::from_position_rotation(target + direction * distance, rotation),
                ..prefab
            };
            ids.push(store.push(spec)?);
        }
        debug!(%group, agents = n, ?target, "spawned group");
        Ok(ids)
    }
}
