//! Transform type and zero-safe vector helpers.
//!
//! Vectors and quaternions are `glam` single-precision types.  The local
//! forward axis is `+Z` and up is `+Y`; an agent's heading is its rotation
//! applied to [`FORWARD`].

use glam::{Quat, Vec3};

/// Local forward axis.
pub const FORWARD: Vec3 = Vec3::Z;

/// Normalise `v`, returning `None` for zero-length or non-finite input.
///
/// Every normalisation in the kernel goes through this so a degenerate
/// vector drops out instead of turning into NaN.
#[inline]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Position plus orientation of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[inline]
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// World-space heading (`rotation * FORWARD`).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// Copy of `self` moved by `offset`.
    #[inline]
    pub fn translated(self, offset: Vec3) -> Self {
        Self { position: self.position + offset, ..self }
    }

    /// Copy of `self` with `delta` applied on top of the current rotation
    /// (world-space: `delta * rotation`).
    #[inline]
    pub fn rotated(self, delta: Quat) -> Self {
        Self { rotation: delta * self.rotation, ..self }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fwd = self.forward();
        write!(
            f,
            "pos ({:.3}, {:.3}, {:.3}) fwd ({:.3}, {:.3}, {:.3})",
            self.position.x, self.position.y, self.position.z, fwd.x, fwd.y, fwd.z,
        )
    }
}
