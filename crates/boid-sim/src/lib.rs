//! `boid-sim` — frame loop orchestrator for the boid flocking workspace.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Index     — bulk-load an R-tree from frame-start transforms + obstacles.
//!   ② Begin     — zero every group's running sums.
//!   ③ Kernel    — SteeringModel::steer for each member of each declared
//!                 group, into that group's staging buffer
//!                 (parallel with the `parallel` feature).
//!   ④ Reduce    — per-group sums over the staged results, absorbed in
//!                 ascending group order.
//!   ⑤ Commit    — staging buffers → AgentStore, one batch per group.
//!   ⑥ Finalise  — sums / count become next frame's averages.
//! ```
//!
//! Kernels read only last frame's averages and the frame-start index, so the
//! outcome does not depend on scheduling or thread count.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the kernel phase on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `FlockConfig`.    |
//!
//! # Quick-start
//!
//! ```rust
//! use boid_sim::{FlockConfig, NoopObserver};
//! use boid_steer::FlockSteering;
//!
//! let mut config = FlockConfig::uniform(4, 40);
//! config.sim.total_frames = 10;
//! let mut sim = config.build_sim(FlockSteering).unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(sim.agents.count, 40);
//! ```

pub mod accumulator;
pub mod builder;
pub mod config;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;
pub mod staging;


pub use accumulator::{GroupAccumulator, GroupAverage, GroupSums};
pub use builder::SimBuilder;
pub use config::{AgentTemplate, FlockConfig};
pub use control::RunControl;
pub use error::{SimError, SimResult};
pub use observer::{FrameStats, NoopObserver, SimObserver};
pub use sim::{GroupPlan, Sim, build_spatial_index};
pub use staging::{GroupStaging, StagingBuffers};
