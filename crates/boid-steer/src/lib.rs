//! `boid-steer` — steering configuration and the per-agent flocking kernel.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`settings`] | `GlobalSettings`, `GroupDescriptor`                               |
//! | [`curve`]    | `ResponseCurve`, `ResponseCurves` (configuration-only hooks)      |
//! | [`sphere`]   | `Sphere`, Fibonacci target placement                              |
//! | [`context`]  | `SteerContext<'a>`, `GroupFrame`, `AgentInput`                    |
//! | [`kernel`]   | `steer_agent`, `torques` — separation / alignment / coherence     |
//! | [`model`]    | `SteeringModel` trait, `FlockSteering`                            |
//! | [`frozen`]   | `FrozenSteering` — placeholder that never moves agents            |
//! | [`error`]    | `SteerError`, `SteerResult<T>`                                    |
//!
//! # Design notes
//!
//! The kernel is a pure function of one agent's inputs plus read-only frame
//! state (settings, the group's lagged averages, the spatial index).  It
//! never sees another agent's output for the current frame, so the
//! simulation can run it in parallel, stage the results, and commit them
//! afterwards.

pub mod context;
pub mod curve;
pub mod error;
pub mod frozen;
pub mod kernel;
pub mod model;
pub mod settings;
pub mod sphere;


pub use context::{AgentInput, GroupFrame, SteerContext};
pub use curve::{CurveKey, ResponseCurve, ResponseCurves};
pub use error::{SteerError, SteerResult};
pub use frozen::FrozenSteering;
pub use kernel::{Torques, steer_agent, torques};
pub use model::{FlockSteering, SteeringModel};
pub use settings::{GlobalSettings, GroupDescriptor};
pub use sphere::{Sphere, golden_angle, unit_sphere_position};
