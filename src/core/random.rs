use rand::Rng;

/// Source of uniform draws for the stub generators
///
/// Production uses [`ThreadRandom`], which is unseeded, so repeated requests
/// with identical input produce different outputs. Tests swap in
/// [`FixedRandom`] to get exact values without touching handler logic.
pub trait RandomSource: Send + Sync {
    /// Draw a value in `[low, high)`
    fn draw_uniform(&self, low: f64, high: f64) -> f64;
}

/// Thread-local RNG, one draw per call
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw_uniform(&self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic source that always lands at the same fraction of the range
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    fraction: f64,
}

impl FixedRandom {
    /// `fraction` is clamped to `[0, 1]`
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for FixedRandom {
    #[inline]
    fn draw_uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.fraction
    }
}
