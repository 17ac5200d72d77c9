//! Process-wide and per-group steering configuration.
//!
//! Both are created at world setup and never change afterwards.  Validation
//! happens once, up front; the kernel trusts its inputs.

use boid_core::{GroupId, Multipliers};
use boid_spatial::CollisionFilter;

use crate::{ResponseCurves, SteerError, SteerResult};

/// Global steering constants shared by every agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlobalSettings {
    /// Outermost weight set (global × group × agent × debug).
    pub multipliers: Multipliers,

    /// Runtime-tweakable weights applied last.  Defaults to all ones.
    pub debug: Multipliers,

    /// Neighbours within this distance push the agent away.
    pub separation_radius: f32,

    /// Layers the separation query can see.
    pub separation_filter: CollisionFilter,

    /// Force-shaping curves.  Not evaluated by the kernel.
    pub curves: ResponseCurves,
}

impl GlobalSettings {
    pub fn validate(&self) -> SteerResult<()> {
        if !self.separation_radius.is_finite() || self.separation_radius < 0.0 {
            return Err(SteerError::Config(format!(
                "separation_radius must be finite and >= 0, got {}",
                self.separation_radius
            )));
        }
        if !self.multipliers.is_finite() || !self.debug.is_finite() {
            return Err(SteerError::Config("global multipliers must be finite".into()));
        }
        self.curves.validate()
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            multipliers:       Multipliers::ONE,
            debug:             Multipliers::ONE,
            separation_radius: 1.0,
            separation_filter: CollisionFilter::ALL,
            curves:            ResponseCurves::default(),
        }
    }
}

/// Immutable per-group configuration shared by all members.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupDescriptor {
    /// `1..GROUP_COUNT`; [`GroupId::NONE`] is never simulated.
    pub id: GroupId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multipliers: Multipliers,
}

impl GroupDescriptor {
    pub fn new(id: GroupId, multipliers: Multipliers) -> Self {
        Self { id, multipliers }
    }

    pub fn validate(&self) -> SteerResult<()> {
        if !self.id.is_simulated() {
            return Err(SteerError::GroupOutOfRange(self.id));
        }
        if !self.multipliers.is_finite() {
            return Err(SteerError::Config(format!(
                "group {} multipliers must be finite",
                self.id
            )));
        }
        Ok(())
    }
}
