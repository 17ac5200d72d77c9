//! `boid-core` — foundational types for the boid flocking workspace.
//!
//! This crate is a dependency of every other `boid-*` crate.  It intentionally
//! has no `boid-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `GroupId`, `GROUP_COUNT`                   |
//! | [`math`]        | `Transform`, `FORWARD`, zero-safe normalisation       |
//! | [`multipliers`] | `Multipliers` (speed / separation / alignment / coherence) |
//! | [`time`]        | `Frame`, `FrameClock`, `SimConfig`                    |
//! | [`rng`]         | `SpawnRng` (seeded placement stream)                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod math;
pub mod multipliers;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use glam::{Quat, Vec3};
pub use ids::{AgentId, GroupId, GROUP_COUNT};
pub use math::{FORWARD, Transform, try_normalize};
pub use multipliers::Multipliers;
pub use rng::SpawnRng;
pub use time::{Frame, FrameClock, SimConfig};
