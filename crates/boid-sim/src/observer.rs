//! Simulation observer trait for progress reporting and data collection.

use boid_agent::AgentStore;
use boid_core::Frame;

/// What happened in one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: Frame,
    /// Delta actually integrated (after [`RunControl`][crate::RunControl]).
    pub delta_secs: f32,
    /// Agents the kernel ran for.
    pub agents: usize,
    /// Declared groups with at least one member.
    pub groups_simulated: usize,
    /// Agents emitted unchanged because their group had no averages yet.
    pub pass_through: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_frames`][crate::Sim::run_frames] at frame boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust
/// use boid_sim::{FrameStats, SimObserver};
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, stats: &FrameStats) {
///         if stats.frame.0 % self.interval == 0 {
///             println!("{}: {} agents", stats.frame, stats.agents);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any processing of `frame`.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after `frame` has been committed.
    fn on_frame_end(&mut self, _stats: &FrameStats) {}

    /// Called every `config.output_interval_frames` frames, after commit.
    fn on_snapshot(&mut self, _frame: Frame, _agents: &AgentStore) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
