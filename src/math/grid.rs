use crate::error::GridError;

/// Uniform time grid `t_start, t_start + dt, ...` with an exclusive stop at `t_end + dt`.
///
/// The last point is `t_end` when `dt` divides the span exactly, and otherwise
/// the first grid point past `t_end`. The length is fixed at construction and is
/// what every trajectory buffer is sized from.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    points: Vec<f64>,
}

impl TimeGrid {
    pub fn build(t_start: f64, t_end: f64, dt: f64, max_points: usize) -> Result<Self, GridError> {
        let n = Self::planned_len(t_start, t_end, dt, max_points)?;
        let points = (0..n).map(|i| t_start + i as f64 * dt).collect();
        Ok(Self { dt, points })
    }

    /// Number of points `build` would produce, validated against `max_points`.
    pub fn planned_len(t_start: f64, t_end: f64, dt: f64, max_points: usize) -> Result<usize, GridError> {
        for (field, v) in [("t_start", t_start), ("t_end", t_end), ("delta_t", dt)] {
            if !v.is_finite() {
                return Err(GridError::NonFinite { field });
            }
        }
        if dt <= 0.0 {
            return Err(GridError::NonPositiveStep(dt));
        }
        if t_end < t_start {
            return Err(GridError::InvertedSpan { t_start, t_end });
        }

        let n = ((t_end + dt - t_start) / dt).ceil().max(1.0);
        if !n.is_finite() || n > max_points as f64 {
            return Err(GridError::TooLarge { points: n, limit: max_points });
        }
        Ok(n as usize)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.points
    }
}
