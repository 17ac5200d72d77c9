//! `boid-agent` — Structure-of-Arrays agent storage for the boid workspace.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`store`]     | `AgentStore` (SoA transforms, multipliers, group, collider) |
//! | [`groups`]    | `GroupIndex` — group id → contiguous member list            |
//! | [`builder`]   | `AgentStoreBuilder`, `AgentSpec` (fluent construction)      |
//! | [`spawn`]     | `Spawner`, `SpawnConfig` — seeded placement around targets  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config types.      |

pub mod builder;
pub mod groups;
pub mod spawn;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentSpec, AgentStoreBuilder, DEFAULT_LAYERS};
pub use groups::GroupIndex;
pub use spawn::{SpawnConfig, Spawner};
pub use store::AgentStore;
