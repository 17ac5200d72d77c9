//! The four steering weights carried at global, group, agent and debug level.

/// Speed and force weights.  The kernel multiplies the global, group, agent
/// and debug sets component-wise to get the effective weight of each term.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Multipliers {
    pub speed:      f32,
    pub separation: f32,
    pub alignment:  f32,
    pub coherence:  f32,
}

impl Multipliers {
    /// Neutral element of [`Multipliers::combine`].
    pub const ONE: Multipliers = Multipliers {
        speed:      1.0,
        separation: 1.0,
        alignment:  1.0,
        coherence:  1.0,
    };

    pub const ZERO: Multipliers = Multipliers {
        speed:      0.0,
        separation: 0.0,
        alignment:  0.0,
        coherence:  0.0,
    };

    #[inline]
    pub fn new(speed: f32, separation: f32, alignment: f32, coherence: f32) -> Self {
        Self { speed, separation, alignment, coherence }
    }

    /// Component-wise product.
    #[inline]
    pub fn combine(self, other: Multipliers) -> Multipliers {
        Multipliers {
            speed:      self.speed * other.speed,
            separation: self.separation * other.separation,
            alignment:  self.alignment * other.alignment,
            coherence:  self.coherence * other.coherence,
        }
    }

    /// `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.speed.is_finite()
            && self.separation.is_finite()
            && self.alignment.is_finite()
            && self.coherence.is_finite()
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::ONE
    }
}
