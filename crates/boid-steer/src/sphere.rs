//! Group target placement on a sphere.
//!
//! Groups are spread over the sphere with a Fibonacci (golden-angle) spiral:
//! slot `i` of `n` sits at height `y = 1 − 2i/(n−1)`, on the ring of radius
//! `sqrt(1 − y²)`, at azimuth `i · golden_angle`.  Slot 0 is the north pole
//! and slot `n−1` the south pole.  With a single group the spiral is
//! undefined (`n − 1 = 0`), so that group targets the north pole.

use std::f32::consts::PI;

use boid_core::{GroupId, Quat, Vec3};

use crate::{SteerError, SteerResult};

/// `π · (3 − √5)` radians.
#[inline]
pub fn golden_angle() -> f32 {
    PI * (3.0 - 5.0_f32.sqrt())
}

/// Unit-sphere position of slot `index` out of `total`.
///
/// `total <= 1` returns the north pole `(0, 1, 0)`.
pub fn unit_sphere_position(index: usize, total: usize) -> Vec3 {
    if total <= 1 {
        return Vec3::Y;
    }
    let y = 1.0 - (index as f32 / (total - 1) as f32) * 2.0;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle() * index as f32;

    Vec3::new(theta.cos() * ring, y, theta.sin() * ring)
        .try_normalize()
        .unwrap_or(Vec3::Y)
}

/// The sphere the group targets sit on.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sphere {
    pub radius: f32,
    /// Orientation applied to every unit position before scaling.
    pub rotation: Quat,
    /// Degrees per second.  Configuration only; nothing advances `rotation`.
    pub rotation_speed: f32,
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Self { radius, ..Self::default() }
    }

    /// World-space target of slot `index` out of `total`.
    #[inline]
    pub fn target(&self, index: usize, total: usize) -> Vec3 {
        (self.rotation * unit_sphere_position(index, total)) * self.radius
    }

    /// Like [`target`](Self::target) but rejects `total == 0` and
    /// `index >= total`.
    pub fn try_target(&self, index: usize, total: usize) -> SteerResult<Vec3> {
        if index >= total {
            return Err(SteerError::PlacementSlot { index, total });
        }
        Ok(self.target(index, total))
    }

    /// Target of `group` when `group_count` groups share the sphere.
    pub fn group_target(&self, group: GroupId, group_count: usize) -> SteerResult<Vec3> {
        let slot = group.placement_slot().ok_or(SteerError::GroupOutOfRange(group))?;
        self.try_target(slot, group_count)
    }

    pub fn validate(&self) -> SteerResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SteerError::Config(format!(
                "sphere radius must be finite and >= 0, got {}",
                self.radius
            )));
        }
        if !self.rotation.is_finite() || !self.rotation.is_normalized() {
            return Err(SteerError::Config("sphere rotation must be a unit quaternion".into()));
        }
        if !self.rotation_speed.is_finite() {
            return Err(SteerError::Config("sphere rotation_speed must be finite".into()));
        }
        Ok(())
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius:         10.0,
            rotation:       Quat::IDENTITY,
            rotation_speed: 0.0,
        }
    }
}
