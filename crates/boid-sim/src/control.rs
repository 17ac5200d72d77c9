//! Run/pause and single-step control.

/// Decides whether a frame integrates motion.
///
/// The application flips these between frames; a frame in flight is never
/// interrupted.  When neither flag is set the frame still runs, with a delta
/// of zero, so bookkeeping (averages, commit, frame counter) keeps going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunControl {
    pub running: bool,
    /// Step-while-held: supplies real delta time while paused.
    pub step_held: bool,
}

impl RunControl {
    pub const RUNNING: RunControl = RunControl { running: true, step_held: false };
    pub const PAUSED: RunControl = RunControl { running: false, step_held: false };

    /// `delta_secs` if motion should advance this frame, else `0.0`.
    #[inline]
    pub fn effective_delta(&self, delta_secs: f32) -> f32 {
        if self.running || self.step_held { delta_secs } else { 0.0 }
    }

    /// Flip between running and paused.
    #[inline]
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::RUNNING
    }
}
