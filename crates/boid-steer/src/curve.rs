//! Response curves mapping a distance or count to a force scale.
//!
//! The kernel does not evaluate these; they are carried in
//! [`GlobalSettings`][crate::GlobalSettings] so force shaping can be added
//! without a configuration format change.

use crate::{SteerError, SteerResult};

/// One `(time, value)` key of a piecewise-linear curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveKey {
    pub time:  f32,
    pub value: f32,
}

/// Piecewise-linear curve, clamped outside its first and last key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseCurve {
    keys: Vec<CurveKey>,
}

impl ResponseCurve {
    /// Build from keys sorted by strictly increasing `time`.
    pub fn new(keys: Vec<CurveKey>) -> SteerResult<Self> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    /// A flat curve.
    pub fn constant(value: f32) -> Self {
        Self { keys: vec![CurveKey { time: 0.0, value }] }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Value at `t`.  An empty curve evaluates to `0.0`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }
        // First key strictly after t; it exists and is not the first key.
        let hi = self.keys.partition_point(|k| k.time <= t);
        let (a, b) = (self.keys[hi - 1], self.keys[hi]);
        let f = (t - a.time) / (b.time - a.time);
        a.value + (b.value - a.value) * f
    }

    pub fn validate(&self) -> SteerResult<()> {
        for k in &self.keys {
            if !k.time.is_finite() || !k.value.is_finite() {
                return Err(SteerError::Config(format!("curve key must be finite, got {k:?}")));
            }
        }
        if self.keys.windows(2).any(|w| w[1].time <= w[0].time) {
            return Err(SteerError::Config(
                "curve keys must have strictly increasing time".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::constant(1.0)
    }
}

/// One curve per force.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponseCurves {
    pub separation: ResponseCurve,
    pub alignment:  ResponseCurve,
    pub coherence:  ResponseCurve,
}

impl ResponseCurves {
    pub fn validate(&self) -> SteerResult<()> {
        self.separation.validate()?;
        self.alignment.validate()?;
        self.coherence.validate()
    }
}
