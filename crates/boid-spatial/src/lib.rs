//! `boid-spatial` — neighbour queries for the per-agent kernel.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`query`]   | `SpatialQuery` trait, `CollisionFilter`, `DistanceHit`         |
//! | [`index`]   | `SpatialIndex` (R-tree over colliders), `SpatialIndexBuilder`  |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod index;
pub mod query;


pub use error::{SpatialError, SpatialResult};
pub use index::{Collider, SpatialIndex, SpatialIndexBuilder};
pub use query::{CollisionFilter, DistanceHit, SpatialQuery};
