//! Fluent builder for constructing an `AgentStore` in one step.
//!
//! # Usage
//!
//! ```rust
//! use boid_agent::{AgentSpec, AgentStoreBuilder};
//! use boid_core::{GroupId, Transform};
//!
//! let store = AgentStoreBuilder::new(2)
//!     .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
//!     .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.groups().len(GroupId(1)), 2);
//! ```

use boid_core::{CoreResult, GroupId, Multipliers, Transform};

use crate::AgentStore;

/// Collision layer given to agents that don't specify one.
pub const DEFAULT_LAYERS: u32 = 1;

/// Everything needed to create one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSpec {
    pub group:       GroupId,
    pub transform:   Transform,
    pub multipliers: Multipliers,
    pub layers:      u32,
    pub trigger:     bool,
}

impl AgentSpec {
    /// A solid agent on the default layer with neutral multipliers.
    pub fn new(group: GroupId, transform: Transform) -> Self {
        Self {
            group,
            transform,
            multipliers: Multipliers::ONE,
            layers:      DEFAULT_LAYERS,
            trigger:     false,
        }
    }

    pub fn with_multipliers(mut self, multipliers: Multipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Mark the agent as a trigger-only collider (invisible to neighbours).
    pub fn as_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }
}

/// Fluent builder for [`AgentStore`].
///
/// Specs are validated in [`build`](Self::build); the first invalid spec
/// aborts construction.
pub struct AgentStoreBuilder {
    specs: Vec<AgentSpec>,
}

impl AgentStoreBuilder {
    /// Create a builder expecting roughly `capacity` agents.
    pub fn new(capacity: usize) -> Self {
        Self { specs: Vec::with_capacity(capacity) }
    }

    /// Queue one agent.
    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Queue many agents.
    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Construct the `AgentStore`, assigning `AgentId`s in queue order.
    pub fn build(self) -> CoreResult<AgentStore> {
        let mut store = AgentStore::with_capacity(self.specs.len());
        for spec in self.specs {
            store.push(spec)?;
        }
        Ok(store)
    }

    /// An empty store with room for `capacity` agents, for callers that
    /// spawn incrementally (see [`Spawner`][crate::Spawner]).
    pub fn empty(capacity: usize) -> AgentStore {
        AgentStore::with_capacity(capacity)
    }
}
