//! Simulation time model.
//!
//! # Design
//!
//! The canonical time unit is a monotonically increasing `Frame` counter.
//! Unlike a fixed-step clock, each frame carries its own delta time (seconds),
//! supplied by the caller once per frame.  A delta of zero is legal and means
//! "freeze motion but still run bookkeeping"; the frame counter advances
//! either way.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute simulation frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and the simulated seconds that have elapsed.
///
/// Elapsed time is accumulated in `f64` so long runs of small deltas do not
/// lose precision.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// The current frame — advanced by [`FrameClock::advance`] after each step.
    pub current_frame: Frame,
    /// Sum of every delta supplied so far, in seconds.
    pub elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which ran with `delta_secs`.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32) {
        self.current_frame = Frame(self.current_frame.0 + 1);
        self.elapsed_secs += delta_secs as f64;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON/TOML file by the application crate and passed
/// to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical placement.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Frames simulated by `Sim::run`.
    pub total_frames: u64,

    /// Delta time fed to each frame by `Sim::run`, in seconds.
    pub fixed_delta_secs: f32,

    /// Take an output snapshot every N frames.  0 disables snapshots.
    pub output_interval_frames: u64,
}

impl SimConfig {
    /// The frame at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Reject non-finite or negative delta times.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.fixed_delta_secs.is_finite() || self.fixed_delta_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "fixed_delta_secs must be finite and >= 0, got {}",
                self.fixed_delta_secs
            )));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                   1234,
            num_threads:            None,
            total_frames:           600,
            fixed_delta_secs:       1.0 / 60.0,
            output_interval_frames: 0,
        }
    }
}
