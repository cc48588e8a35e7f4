use serde::{Deserialize, Serialize};

/// Logistic growth dP/dt = r P (1 - P / K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Intrinsic growth rate.
    pub r: f64,
    /// Carrying capacity.
    pub k: f64,
}

impl LogisticModel {
    pub fn new(r: f64, k: f64) -> Self {
        Self { r, k }
    }

    /// Instantaneous rate of change at population `p`.
    ///
    /// `t` is part of the signature so time-varying rate laws can share the
    /// integrators; the logistic law does not depend on it. `k == 0` is not
    /// guarded and yields whatever IEEE arithmetic gives (inf or NaN).
    pub fn rate(&self, _t: f64, p: f64) -> f64 {
        self.r * p * (1.0 - p / self.k)
    }

    /// Closed-form solution starting from `p0` at `t0`.
    pub fn exact(&self, t: f64, t0: f64, p0: f64) -> f64 {
        self.k / (1.0 + ((self.k - p0) / p0) * (-self.r * (t - t0)).exp())
    }
}
